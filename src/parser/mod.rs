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

mod ast_builder;

use crate::ast::Statement;
use anyhow::Result;
use pest::Parser;
use pest_derive::Parser;

// Derive the parser from our grammar file.
#[derive(Parser)]
#[grammar = "./grammar.pest"]
pub struct Asm16Parser;

/// Maps a physical line in the preprocessed source back to the logical
/// line a `cpp` linemarker (`# <num> "<file>" ...`) declared, so error
/// messages read against the original file rather than the expanded one.
struct LineMap {
    marks: Vec<(usize, usize)>,
}

impl LineMap {
    fn build(source: &str) -> Self {
        let mut marks = Vec::new();
        for (idx, text) in source.lines().enumerate() {
            let physical = idx + 1;
            let trimmed = text.trim_start();
            let Some(rest) = trimmed.strip_prefix('#') else {
                continue;
            };
            let rest = rest.trim_start();
            if let Some(declared) = rest
                .split_whitespace()
                .next()
                .and_then(|tok| tok.parse::<usize>().ok())
            {
                marks.push((physical + 1, declared));
            }
        }
        LineMap { marks }
    }

    fn translate(&self, physical: usize) -> usize {
        match self.marks.binary_search_by(|(p, _)| p.cmp(&physical)) {
            Ok(i) => self.marks[i].1,
            Err(0) => physical,
            Err(i) => {
                let (mark_physical, mark_declared) = self.marks[i - 1];
                mark_declared + (physical - mark_physical)
            }
        }
    }
}

/// Parses an entire (already preprocessed) source string into the
/// statement stream the code generator consumes, each statement tagged
/// with the logical source line it came from (post `LineMap` translation)
/// for use in error messages raised later by the code generator.
pub fn parse_source(source: &str) -> Result<Vec<(usize, Statement)>> {
    let line_map = LineMap::build(source);
    let pairs = Asm16Parser::parse(Rule::program, source)?;
    let mut statements = Vec::new();

    for line_pair in pairs
        .flatten()
        .filter(|p| p.as_rule() == Rule::line_content)
    {
        let physical_line = line_pair.as_span().start_pos().line_col().0;
        let line = line_map.translate(physical_line);
        let mut inner = line_pair.into_inner();

        let Some(first) = inner.peek() else {
            continue;
        };

        if first.as_rule() == Rule::linemarker {
            continue;
        }

        if first.as_rule() == Rule::label {
            let label_pair = inner.next().unwrap();
            let name = label_pair.as_str().trim_end_matches(':').to_string();
            statements.push((line, Statement::Label(name)));
        }

        if let Some(pair) = inner.next() {
            match pair.as_rule() {
                Rule::instruction => {
                    statements.push((line, ast_builder::build_instruction(pair, line)?))
                }
                Rule::directive => statements.extend(
                    ast_builder::build_directives(pair, line)?
                        .into_iter()
                        .map(|stmt| (line, stmt)),
                ),
                other => unreachable!("unexpected line_content member: {:?}", other),
            }
        }
    }

    Ok(statements)
}
