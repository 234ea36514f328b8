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

use crate::ast::{Operand, Statement};
use crate::errors::AssemblyError;
use crate::parser::Rule;
use crate::parser::ast_builder::operand_builders::build_operand;
use anyhow::Result;
use pest::iterators::Pair;

/// Expands a parsed `directive` pair into one `Statement::Directive` per
/// operand, so the code generator's contract (0 or 1 operand) holds even
/// though the grammar accepts a comma list for convenience, e.g.
/// `.word 1, 2, 3` desugars into three separate `.word` statements.
pub fn build_directives(pair: Pair<Rule>, line: usize) -> Result<Vec<Statement>> {
    let mut inner = pair.into_inner();
    let name = inner
        .next()
        .ok_or_else(|| AssemblyError::StructuralError {
            line,
            reason: "missing directive name".to_string(),
        })?
        .as_str()
        .to_string();

    let operands: Vec<Operand> = inner.map(|p| build_operand(p, line)).collect::<Result<_>>()?;

    if operands.is_empty() {
        return Ok(vec![Statement::Directive(name, None)]);
    }

    Ok(operands
        .into_iter()
        .map(|op| Statement::Directive(name.clone(), Some(op)))
        .collect())
}
