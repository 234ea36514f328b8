/*
Copyright 2026 The Authors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! The code generator: pass 1 (`CodeGenerator`, driven by the parser's
//! `add_label`/`add_directive`/`add_instruction` calls) and pass 2 (the
//! `fixups` resolver).

mod directives;
mod encoder;
mod fixups;
mod opcode_table;
pub mod output;
pub mod symbol_table;

use crate::ast::{Operand, Statement};
use crate::errors::AssemblyError;
use opcode_table::IType;
use output::OutputEntry;
use symbol_table::SymbolTable;

/// Pass-1 state: current address, the growing output buffer and symbol
/// table. Lives for exactly one assembly run.
pub struct CodeGenerator {
    cur_addr: u16,
    output: Vec<OutputEntry>,
    symbols: SymbolTable,
    verbose: u8,
}

impl CodeGenerator {
    pub fn new(verbose: u8) -> Self {
        CodeGenerator {
            cur_addr: 0,
            output: Vec::new(),
            symbols: SymbolTable::new(),
            verbose,
        }
    }

    pub fn add_label(&mut self, name: &str, line: usize) -> Result<(), AssemblyError> {
        if self.verbose >= 2 {
            tracing::trace!(line, label = name, addr = self.cur_addr, "label");
        }
        self.symbols.add_label(name, self.cur_addr, line)
    }

    pub fn add_directive(
        &mut self,
        name: &str,
        operand: Option<Operand>,
        line: usize,
    ) -> Result<(), AssemblyError> {
        if self.verbose >= 2 {
            tracing::trace!(line, directive = name, "directive");
        }
        let text = Statement::Directive(name.to_string(), operand.clone()).reconstruct();
        let entry = directives::build_data_entry(
            name,
            operand.as_ref(),
            self.cur_addr,
            text,
            &mut self.symbols,
            line,
        )?;
        self.cur_addr += entry.length();
        self.output.push(entry);
        Ok(())
    }

    pub fn add_instruction(
        &mut self,
        mnemonic: &str,
        args: Vec<Operand>,
        line: usize,
    ) -> Result<(), AssemblyError> {
        if self.verbose >= 2 {
            tracing::trace!(line, mnemonic, ?args, "instruction");
        }
        let table_entry =
            opcode_table::lookup(mnemonic).ok_or_else(|| AssemblyError::UnknownInstruction {
                line,
                mnemonic: mnemonic.to_string(),
            })?;

        let text = Statement::Instruction(mnemonic.to_string(), args.clone()).reconstruct();

        let encoded = match table_entry.itype {
            IType::Alu => {
                encoder::encode_alu(&table_entry, mnemonic, &args, &mut self.symbols, line)?
            }
            IType::ShortBranch | IType::ShortOrLongBranch | IType::LongBranch => {
                encoder::encode_branch(&table_entry, mnemonic, &args, &mut self.symbols, line)?
            }
        };

        let entry = OutputEntry::Instruction {
            op: encoded.op,
            op2: encoded.op2,
            length: encoded.length,
            addr: self.cur_addr,
            text,
            fixup: encoded.fixup,
            line,
        };
        self.cur_addr += encoded.length;
        self.output.push(entry);
        Ok(())
    }

    /// Runs the pass-2 fixup resolver and returns the final output buffer.
    pub fn finish(mut self) -> Result<Vec<OutputEntry>, AssemblyError> {
        fixups::resolve(&mut self.output, &self.symbols)?;
        Ok(self.output)
    }
}

/// Drives a full `(line, statement)` stream through pass 1 and pass 2, the
/// shape `lib.rs::assemble` calls.
pub fn generate(
    statements: Vec<(usize, Statement)>,
    verbose: u8,
) -> Result<Vec<OutputEntry>, AssemblyError> {
    let mut codegen = CodeGenerator::new(verbose);
    for (line, statement) in statements {
        match statement {
            Statement::Label(name) => codegen.add_label(&name, line)?,
            Statement::Directive(name, operand) => codegen.add_directive(&name, operand, line)?,
            Statement::Instruction(mnemonic, args) => {
                codegen.add_instruction(&mnemonic, args, line)?
            }
        }
    }
    codegen.finish()
}
