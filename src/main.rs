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

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use asm16::emitters;
use asm16::preprocessor::CppPreprocess;
use clap::Parser;

/// Two-pass assembler for the 16-bit ISA.
#[derive(Parser)]
#[command(version, author)]
struct Opts {
    /// Source file to assemble. Reads standard input if omitted.
    infile: Option<PathBuf>,

    /// Binary output: a flat stream of big-endian 16-bit words.
    #[arg(short, long = "out")]
    out: Option<PathBuf>,

    /// Plain hex listing.
    #[arg(short = 'x', long = "hex")]
    hex: Option<PathBuf>,

    /// Alternate hex listing (C array initializer syntax).
    #[arg(short = 'X', long = "hex2")]
    hex2: Option<PathBuf>,

    /// Repeatable: 1 = pipeline progress, 2 = per-statement trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .init();
}

fn read_source(infile: &Option<PathBuf>) -> Result<String> {
    match infile {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_tracing(opts.verbose);

    let source = read_source(&opts.infile)?;
    let output = asm16::assemble(&source, &CppPreprocess, opts.verbose)?;

    if let Some(path) = &opts.out {
        fs::write(path, emitters::emit_binary(&output))
            .with_context(|| format!("failed to write binary output to {}", path.display()))?;
    }
    if let Some(path) = &opts.hex {
        fs::write(path, emitters::emit_hex(&output))
            .with_context(|| format!("failed to write hex listing to {}", path.display()))?;
    }
    if let Some(path) = &opts.hex2 {
        fs::write(path, emitters::emit_hex2(&output))
            .with_context(|| format!("failed to write alternate hex listing to {}", path.display()))?;
    }

    Ok(())
}
