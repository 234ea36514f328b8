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

use crate::assembler::symbol_table::SymbolId;

/// A deferred patch applied to an already-emitted entry once its symbol
/// resolves in pass 2.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fixup {
    ShortBranch(SymbolId),
    LongBranch(SymbolId),
    SymbolAbsolute(SymbolId),
    DataSymbolAbsolute(SymbolId),
}

/// One element of the output buffer, in emission order. `Instruction` and
/// `Data` share only address/length/text/fixup; there's no inheritance to
/// model, so this is a plain sum type.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputEntry {
    Instruction {
        op: u16,
        op2: u16,
        length: u16,
        addr: u16,
        text: String,
        fixup: Option<Fixup>,
        line: usize,
    },
    Data {
        words: Vec<u16>,
        /// Word count this entry occupies in the image. Usually
        /// `words.len()`, except for a `.word <ID>` placeholder: pass 1
        /// reserves the slot (`length = 1`) before the symbol is known, and
        /// the resolver only pushes the actual word into `words` once it
        /// patches the fixup in pass 2. Keeping `length` independent of
        /// `words.len()` preserves the "length never changes after pass 1"
        /// invariant even while `words` is still empty.
        length: u16,
        addr: u16,
        text: String,
        fixup: Option<Fixup>,
        line: usize,
    },
}

impl OutputEntry {
    pub fn addr(&self) -> u16 {
        match self {
            OutputEntry::Instruction { addr, .. } => *addr,
            OutputEntry::Data { addr, .. } => *addr,
        }
    }

    pub fn length(&self) -> u16 {
        match self {
            OutputEntry::Instruction { length, .. } => *length,
            OutputEntry::Data { length, .. } => *length,
        }
    }

    pub fn fixup(&self) -> Option<Fixup> {
        match self {
            OutputEntry::Instruction { fixup, .. } => *fixup,
            OutputEntry::Data { fixup, .. } => *fixup,
        }
    }

    /// The words this entry contributes to the final image, in order. Only
    /// meaningful after pass 2: a still-pending `.word <ID>` placeholder
    /// returns an empty vec until the resolver fills it in.
    pub fn words(&self) -> Vec<u16> {
        match self {
            OutputEntry::Instruction {
                op, op2, length, ..
            } => {
                if *length == 2 {
                    vec![*op, *op2]
                } else {
                    vec![*op]
                }
            }
            OutputEntry::Data { words, .. } => words.clone(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            OutputEntry::Instruction { text, .. } => text,
            OutputEntry::Data { text, .. } => text,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            OutputEntry::Instruction { line, .. } => *line,
            OutputEntry::Data { line, .. } => *line,
        }
    }

    /// Ors `bits` into the low 10 bits of `op` (short branch patch) and
    /// clears the fixup. Only valid on `Instruction` entries.
    pub fn patch_short_branch(&mut self, field: u16) {
        match self {
            OutputEntry::Instruction { op, fixup, .. } => {
                *op |= field & 0x3FF;
                *fixup = None;
            }
            OutputEntry::Data { .. } => unreachable!("short branch fixup on a data entry"),
        }
    }

    /// Sets `op2` (long branch offset or ALU symbol-absolute patch) and
    /// clears the fixup. Only valid on `Instruction` entries.
    pub fn patch_op2(&mut self, value: u16) {
        match self {
            OutputEntry::Instruction { op2, fixup, .. } => {
                *op2 = value;
                *fixup = None;
            }
            OutputEntry::Data { .. } => unreachable!("op2 fixup on a data entry"),
        }
    }

    /// Appends the resolved word to a `.word <ID>` placeholder and clears
    /// the fixup. Only valid on `Data` entries.
    pub fn push_data_word(&mut self, value: u16) {
        match self {
            OutputEntry::Data { words, fixup, .. } => {
                words.push(value);
                *fixup = None;
            }
            OutputEntry::Instruction { .. } => unreachable!("data word fixup on an instruction entry"),
        }
    }
}
