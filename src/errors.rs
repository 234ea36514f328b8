use thiserror::Error;

/// All fatal error conditions the assembler can raise. Assembly halts on
/// the first one; there is no recovery or continuation.
#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("Syntax Error: {0}")]
    PestError(#[from] pest::error::Error<crate::parser::Rule>),

    #[error("line {line}: unknown instruction `{mnemonic}`")]
    UnknownInstruction { line: usize, mnemonic: String },

    #[error("line {line}: unknown directive `{name}`")]
    UnknownDirective { line: usize, name: String },

    #[error("line {line}: no argument pattern matches `{mnemonic}` with {count} operand(s)")]
    ArgMatch {
        line: usize,
        mnemonic: String,
        count: usize,
    },

    #[error("line {line}: operand has the wrong type: {reason}")]
    BadOperandType { line: usize, reason: String },

    #[error("line {line}: immediate value {value} is out of the representable 16-bit range")]
    ImmediateRange { line: usize, value: i32 },

    #[error("line {line}: short branch offset {offset} is outside the allowed range")]
    ShortBranchRange { line: usize, offset: i32 },

    #[error("line {line}: long branch via r0 is not permitted")]
    RegisterBranchR0 { line: usize },

    #[error(
        "line {line}: register operand in B cannot be combined with a special register in D or A"
    )]
    SpecialRegConflict { line: usize },

    #[error("line {line}: label `{name}` is already defined")]
    DuplicateLabel { line: usize, name: String },

    #[error("symbol `{name}` was referenced but never defined")]
    UnresolvedSymbol { name: String },

    #[error("line {line}: directive `{name}` received an operand of the wrong kind: {reason}")]
    BadDirectiveOperand {
        line: usize,
        name: String,
        reason: String,
    },

    #[error("line {line}: {reason}")]
    StructuralError { line: usize, reason: String },
}
