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

//! The statement and operand types produced by the parser and consumed by
//! the code generator: a stream of labels, directives and instructions,
//! each carrying a small set of tagged operands.

/// A single register operand. `0..=7` are general purpose; `8..=11` are
/// the "special" registers (link, stack pointer, program counter,
/// condition register), which don't fit in a 3 bit field and force the
/// encoder into its escape form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Register {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    Lr,
    Sp,
    Pc,
    Cr,
}

impl Register {
    /// The full register index, 0-11.
    pub fn index(self) -> u8 {
        match self {
            Register::R0 => 0,
            Register::R1 => 1,
            Register::R2 => 2,
            Register::R3 => 3,
            Register::R4 => 4,
            Register::R5 => 5,
            Register::R6 => 6,
            Register::R7 => 7,
            Register::Lr => 8,
            Register::Sp => 9,
            Register::Pc => 10,
            Register::Cr => 11,
        }
    }

    /// Registers 8-11 don't fit the 3-bit field used by a D or A slot.
    pub fn is_special(self) -> bool {
        self.index() >= 8
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Register::Lr => write!(f, "lr"),
            Register::Sp => write!(f, "sp"),
            Register::Pc => write!(f, "pc"),
            Register::Cr => write!(f, "cr"),
            r => write!(f, "r{}", r.index()),
        }
    }
}

/// Tagged operand value, as delivered by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Register(Register),
    Number(i32),
    Identifier(String),
    String(String),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Register(r) => write!(f, "{}", r),
            Operand::Number(n) if *n < 0 => write!(f, "-{:#x}", n.unsigned_abs()),
            Operand::Number(n) => write!(f, "{:#x}", n),
            Operand::Identifier(id) => write!(f, "{}", id),
            Operand::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// One statement handed to the code generator. The parser is stateless
/// with respect to the generator: it only ever produces this stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Label(String),
    Directive(String, Option<Operand>),
    Instruction(String, Vec<Operand>),
}

impl Statement {
    /// Reconstructs a source-like line for the listing text, computed
    /// eagerly here rather than decoded back out of encoded bytes.
    pub fn reconstruct(&self) -> String {
        match self {
            Statement::Label(name) => format!("{}:", name),
            Statement::Directive(name, Some(op)) => format!("{} {}", name, op),
            Statement::Directive(name, None) => name.clone(),
            Statement::Instruction(mnemonic, args) => {
                if args.is_empty() {
                    mnemonic.clone()
                } else {
                    let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                    format!("{} {}", mnemonic, rendered.join(", "))
                }
            }
        }
    }
}
