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

//! Data directive handler: `.word`, `.ascii`/`.asciiz`,
//! `.asciib`/`.asciibz`.

use crate::assembler::output::{Fixup, OutputEntry};
use crate::assembler::symbol_table::SymbolTable;
use crate::ast::Operand;
use crate::errors::AssemblyError;

pub fn build_data_entry(
    name: &str,
    operand: Option<&Operand>,
    addr: u16,
    text: String,
    symbols: &mut SymbolTable,
    line: usize,
) -> Result<OutputEntry, AssemblyError> {
    match name {
        ".word" => word_entry(operand, addr, text, symbols, line),
        ".ascii" => ascii_entry(operand, addr, text, line, false),
        ".asciiz" => ascii_entry(operand, addr, text, line, true),
        ".asciib" => asciib_entry(operand, addr, text, line, false),
        ".asciibz" => asciib_entry(operand, addr, text, line, true),
        other => Err(AssemblyError::UnknownDirective {
            line,
            name: other.to_string(),
        }),
    }
}

fn word_entry(
    operand: Option<&Operand>,
    addr: u16,
    text: String,
    symbols: &mut SymbolTable,
    line: usize,
) -> Result<OutputEntry, AssemblyError> {
    match operand {
        Some(Operand::Number(n)) => Ok(OutputEntry::Data {
            words: vec![(*n as i64 & 0xFFFF) as u16],
            length: 1,
            addr,
            text,
            fixup: None,
            line,
        }),
        Some(Operand::Identifier(name)) => {
            let id = symbols.get_symbol_ref(name);
            Ok(OutputEntry::Data {
                words: vec![],
                length: 1,
                addr,
                text,
                fixup: Some(Fixup::DataSymbolAbsolute(id)),
                line,
            })
        }
        other => Err(AssemblyError::BadDirectiveOperand {
            line,
            name: ".word".to_string(),
            reason: format!("expected a number or a label, found {:?}", other),
        }),
    }
}

fn ascii_entry(
    operand: Option<&Operand>,
    addr: u16,
    text: String,
    line: usize,
    terminate: bool,
) -> Result<OutputEntry, AssemblyError> {
    let Some(Operand::String(s)) = operand else {
        return Err(AssemblyError::BadDirectiveOperand {
            line,
            name: if terminate { ".asciiz" } else { ".ascii" }.to_string(),
            reason: "expected a string literal".to_string(),
        });
    };

    let mut words: Vec<u16> = s.chars().map(|c| c as u16).collect();
    if terminate {
        words.push(0);
    }

    Ok(OutputEntry::Data {
        length: words.len() as u16,
        words,
        addr,
        text,
        fixup: None,
        line,
    })
}

fn asciib_entry(
    operand: Option<&Operand>,
    addr: u16,
    text: String,
    line: usize,
    terminate: bool,
) -> Result<OutputEntry, AssemblyError> {
    let Some(Operand::String(s)) = operand else {
        return Err(AssemblyError::BadDirectiveOperand {
            line,
            name: if terminate { ".asciibz" } else { ".asciib" }.to_string(),
            reason: "expected a string literal".to_string(),
        });
    };

    let mut bytes = s.as_bytes().to_vec();
    if terminate {
        bytes.push(0);
    }
    if bytes.len() % 2 != 0 {
        bytes.push(0);
    }

    let words: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| ((pair[0] as u16) << 8) | pair[1] as u16)
        .collect();

    Ok(OutputEntry::Data {
        length: words.len() as u16,
        words,
        addr,
        text,
        fixup: None,
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_number_is_masked_to_16_bits() {
        let mut symbols = SymbolTable::new();
        let entry =
            word_entry(Some(&Operand::Number(-1)), 0, ".word -1".to_string(), &mut symbols, 1)
                .unwrap();
        assert_eq!(entry.words(), vec![0xFFFF]);
    }

    #[test]
    fn word_identifier_reserves_a_pending_slot() {
        let mut symbols = SymbolTable::new();
        let entry = word_entry(
            Some(&Operand::Identifier("x".to_string())),
            0,
            ".word x".to_string(),
            &mut symbols,
            1,
        )
        .unwrap();
        assert_eq!(entry.length(), 1);
        assert!(entry.words().is_empty());
        assert!(matches!(entry.fixup(), Some(Fixup::DataSymbolAbsolute(_))));
    }

    #[test]
    fn asciiz_appends_one_terminating_word() {
        let entry = ascii_entry(
            Some(&Operand::String("AB".to_string())),
            0,
            ".asciiz \"AB\"".to_string(),
            1,
            true,
        )
        .unwrap();
        assert_eq!(entry.words(), vec![0x0041, 0x0042, 0x0000]);
    }

    #[test]
    fn asciib_pads_odd_length_strings_with_a_nul() {
        let entry = asciib_entry(
            Some(&Operand::String("abc".to_string())),
            0,
            ".asciib \"abc\"".to_string(),
            1,
            false,
        )
        .unwrap();
        assert_eq!(entry.words(), vec![0x6162, 0x6300]);
    }

    #[test]
    fn ascii_without_a_string_is_rejected() {
        let err = ascii_entry(Some(&Operand::Number(1)), 0, String::new(), 1, false).unwrap_err();
        assert!(matches!(err, AssemblyError::BadDirectiveOperand { .. }));
    }
}
