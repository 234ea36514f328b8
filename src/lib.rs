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

//! Two-pass assembler for the 16-bit ISA: preprocess, parse, generate
//! code, emit. See `assembler` for the codegen/symbol-resolution core
//! core, `parser` for the lexer/grammar, `preprocessor`
//! for the `cpp` invocation, and `emitters` for the three output writers.

pub mod assembler;
pub mod ast;
pub mod emitters;
pub mod errors;
pub mod parser;
pub mod preprocessor;

extern crate pest;
extern crate pest_derive;

use anyhow::{Context, Result};
use assembler::output::OutputEntry;
use preprocessor::Preprocess;

/// Runs the full pipeline over raw (not yet preprocessed) assembly source:
/// `cpp`, parse, two-pass codegen. Returns the final output buffer, ready
/// for any of the three emitters.
pub fn assemble<P: Preprocess>(
    source: &str,
    preprocess: &P,
    verbose: u8,
) -> Result<Vec<OutputEntry>> {
    if verbose >= 1 {
        tracing::debug!("running preprocessor");
    }
    let preprocessed = preprocess
        .run(source)
        .context("failed during preprocessor stage")?;

    if verbose >= 1 {
        tracing::debug!("parsing preprocessed source");
    }
    let statements = parser::parse_source(&preprocessed).context("failed during parsing stage")?;

    if verbose >= 1 {
        tracing::debug!(count = statements.len(), "generating machine code");
    }
    let output = assembler::generate(statements, verbose).context("failed during codegen")?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use preprocessor::IdentityPreprocess;

    #[test]
    fn assembles_nop_to_a_single_zero_word() {
        let out = assemble("nop\n", &IdentityPreprocess, 0).unwrap();
        assert_eq!(emitters::emit_binary(&out), vec![0x00, 0x00]);
    }

    #[test]
    fn assembles_self_branch_with_resolved_offset() {
        let out = assemble("label: b label\n", &IdentityPreprocess, 0).unwrap();
        let words: Vec<u16> = out.iter().flat_map(|e| e.words()).collect();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1], 0xFFFE);
    }

    #[test]
    fn unresolved_symbol_propagates_as_an_error() {
        let err = assemble("b nowhere\n", &IdentityPreprocess, 0).unwrap_err();
        assert!(err.to_string().contains("codegen"));
    }
}
