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

use crate::ast::Operand;
use crate::errors::AssemblyError;
use crate::parser::Rule;
use crate::parser::ast_builder::utility_functions::*;
use anyhow::Result;
use pest::iterators::Pair;

// Helper to build an Operand from a pest Pair matching the `operand` rule.
pub fn build_operand(pair: Pair<Rule>, line: usize) -> Result<Operand> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| AssemblyError::StructuralError {
            line,
            reason: "expected an operand".to_string(),
        })?;

    match inner.as_rule() {
        Rule::register => Ok(Operand::Register(str_to_reg(inner.as_str(), line)?)),
        Rule::number => Ok(Operand::Number(parse_number(inner.as_str(), line)?)),
        Rule::identifier => Ok(Operand::Identifier(inner.as_str().to_string())),
        Rule::str_literal => build_string_literal(inner, line),
        _ => unreachable!("unknown operand rule: {:?}", inner.as_rule()),
    }
}

fn build_string_literal(pair: Pair<Rule>, line: usize) -> Result<Operand> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| AssemblyError::StructuralError {
            line,
            reason: "expected a string body".to_string(),
        })?;
    Ok(Operand::String(unescape_string(inner.as_str())))
}
