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

mod directive;
mod operand_builders;
mod utility_functions;

use crate::ast::Statement;
use crate::errors::AssemblyError;
use crate::parser::Rule;
use anyhow::Result;
use operand_builders::build_operand;
use pest::iterators::Pair;

pub use directive::build_directives;

// Helper to build an Instruction statement from a pest Pair.
pub fn build_instruction(pair: Pair<Rule>, line: usize) -> Result<Statement> {
    let mut inner = pair.into_inner();
    let mnemonic = inner
        .next()
        .ok_or_else(|| AssemblyError::StructuralError {
            line,
            reason: "missing mnemonic".to_string(),
        })?
        .as_str()
        .to_string();

    let args = inner
        .map(|op_pair| build_operand(op_pair, line))
        .collect::<Result<Vec<_>>>()?;

    Ok(Statement::Instruction(mnemonic, args))
}
