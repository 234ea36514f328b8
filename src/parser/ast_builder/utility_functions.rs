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

use crate::ast::Register;
use crate::errors::AssemblyError;
use anyhow::Result;

// translate a register token to a Register; no range check needed, the
// grammar only ever lexes a token this function recognizes
pub fn str_to_reg(s: &str, line: usize) -> Result<Register> {
    match s {
        "r0" => Ok(Register::R0),
        "r1" => Ok(Register::R1),
        "r2" => Ok(Register::R2),
        "r3" => Ok(Register::R3),
        "r4" => Ok(Register::R4),
        "r5" => Ok(Register::R5),
        "r6" => Ok(Register::R6),
        "r7" => Ok(Register::R7),
        "lr" => Ok(Register::Lr),
        "sp" => Ok(Register::Sp),
        "pc" => Ok(Register::Pc),
        "cr" => Ok(Register::Cr),
        _ => Err(AssemblyError::StructuralError {
            line,
            reason: format!("not a register: {}", s),
        }
        .into()),
    }
}

// parse a lexed number token ("-"? ("0x" hex+ | dec+)) into its signed
// 32 bit value; range checking against an operand's actual use happens in
// the code generator, not here (per the data model, Number carries a raw
// 32 bit signed value as parsed)
pub fn parse_number(s: &str, line: usize) -> Result<i32> {
    let (neg, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let magnitude = if let Some(hex) = body.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
    } else {
        body.parse::<i64>()
    }
    .map_err(|_| AssemblyError::StructuralError {
        line,
        reason: format!("invalid numeric literal: {}", s),
    })?;

    let signed = if neg { -magnitude } else { magnitude };

    i32::try_from(signed)
        .map_err(|_| {
            AssemblyError::StructuralError {
                line,
                reason: format!("numeric literal out of 32 bit range: {}", s),
            }
            .into()
        })
}

// unescape a string literal body (`\"` and `\\`, plus the common control
// escapes cpp's output can legally contain)
pub fn unescape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
