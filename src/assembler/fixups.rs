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

//! Pass 2: walks the completed output buffer and patches every pending
//! fixup against the now-final symbol table.

use crate::assembler::encoder::constants::{SHORT_BRANCH_PASS2_MAX, SHORT_BRANCH_PASS2_MIN};
use crate::assembler::output::{Fixup, OutputEntry};
use crate::assembler::symbol_table::SymbolTable;
use crate::errors::AssemblyError;

pub fn resolve(output: &mut [OutputEntry], symbols: &SymbolTable) -> Result<(), AssemblyError> {
    for entry in output.iter_mut() {
        let Some(fixup) = entry.fixup() else {
            continue;
        };

        match fixup {
            Fixup::ShortBranch(id) => {
                let symbol = symbols.get(id);
                if !symbol.resolved {
                    return Err(AssemblyError::UnresolvedSymbol {
                        name: symbol.name.clone(),
                    });
                }
                let offset = symbol.addr as i32 - (entry.addr() as i32 + 1);
                if !(SHORT_BRANCH_PASS2_MIN..SHORT_BRANCH_PASS2_MAX).contains(&offset) {
                    return Err(AssemblyError::ShortBranchRange {
                        line: entry.line(),
                        offset,
                    });
                }
                entry.patch_short_branch((offset as i64 & 0xFFFF) as u16);
            }
            Fixup::LongBranch(id) => {
                let symbol = symbols.get(id);
                if !symbol.resolved {
                    return Err(AssemblyError::UnresolvedSymbol {
                        name: symbol.name.clone(),
                    });
                }
                let offset = symbol.addr as i32 - (entry.addr() as i32 + 2);
                entry.patch_op2((offset as i64 & 0xFFFF) as u16);
            }
            Fixup::SymbolAbsolute(id) => {
                let symbol = symbols.get(id);
                if !symbol.resolved {
                    return Err(AssemblyError::UnresolvedSymbol {
                        name: symbol.name.clone(),
                    });
                }
                entry.patch_op2(symbol.addr);
            }
            Fixup::DataSymbolAbsolute(id) => {
                let symbol = symbols.get(id);
                if !symbol.resolved {
                    return Err(AssemblyError::UnresolvedSymbol {
                        name: symbol.name.clone(),
                    });
                }
                entry.push_data_word(symbol.addr);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_short_branch_fails() {
        let mut symbols = SymbolTable::new();
        let id = symbols.get_symbol_ref("target");
        let mut output = vec![OutputEntry::Instruction {
            op: 0,
            op2: 0,
            length: 1,
            addr: 0,
            text: "beq target".to_string(),
            fixup: Some(Fixup::ShortBranch(id)),
            line: 1,
        }];
        let err = resolve(&mut output, &symbols).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::UnresolvedSymbol {
                name: "target".to_string()
            }
        );
    }

    #[test]
    fn long_branch_offset_wraps_without_range_check() {
        let mut symbols = SymbolTable::new();
        let id = symbols.get_symbol_ref("label");
        symbols.add_label("label", 0, 1).unwrap();
        let mut output = vec![OutputEntry::Instruction {
            op: 0,
            op2: 0,
            length: 2,
            addr: 0,
            text: "b label".to_string(),
            fixup: Some(Fixup::LongBranch(id)),
            line: 1,
        }];
        resolve(&mut output, &symbols).unwrap();
        match &output[0] {
            OutputEntry::Instruction { op2, fixup, .. } => {
                assert_eq!(*op2, 0xFFFE);
                assert!(fixup.is_none());
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn short_branch_out_of_range_is_rejected() {
        let mut symbols = SymbolTable::new();
        let id = symbols.get_symbol_ref("far");
        symbols.add_label("far", 1000, 1).unwrap();
        let mut output = vec![OutputEntry::Instruction {
            op: 0,
            op2: 0,
            length: 1,
            addr: 0,
            text: "beq far".to_string(),
            fixup: Some(Fixup::ShortBranch(id)),
            line: 4,
        }];
        let err = resolve(&mut output, &symbols).unwrap_err();
        assert!(matches!(err, AssemblyError::ShortBranchRange { line: 4, .. }));
    }

    #[test]
    fn data_symbol_absolute_appends_the_resolved_word() {
        let mut symbols = SymbolTable::new();
        let id = symbols.get_symbol_ref("data");
        symbols.add_label("data", 0x20, 1).unwrap();
        let mut output = vec![OutputEntry::Data {
            words: vec![],
            length: 1,
            addr: 0,
            text: ".word data".to_string(),
            fixup: Some(Fixup::DataSymbolAbsolute(id)),
            line: 2,
        }];
        resolve(&mut output, &symbols).unwrap();
        assert_eq!(output[0].words(), vec![0x20]);
    }
}
