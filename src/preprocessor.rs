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

//! Invokes `cpp -nostdinc` over the input source and hands its
//! stdout to the parser. Out of scope for the codegen's own design per
//! design, but a complete crate still has to own it.

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Context, Result};

/// Seam between the pipeline and whatever turns raw assembly text into
/// preprocessed text: a real `cpp` subprocess in production, an identity
/// pass-through in tests that don't want a `cpp` binary on `PATH`.
pub trait Preprocess {
    fn run(&self, source: &str) -> Result<String>;
}

/// Production implementation: pipes `source` into `cpp -nostdinc`'s stdin
/// and reads its stdout back as a `String` (blocking, single child
/// process; the stdin write runs on its own thread so a large source
/// doesn't deadlock against `cpp`'s stdout buffer).
pub struct CppPreprocess;

impl Preprocess for CppPreprocess {
    fn run(&self, source: &str) -> Result<String> {
        let mut child = Command::new("cpp")
            .arg("-nostdinc")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("failed to spawn cpp -nostdinc")?;

        // Write on a separate thread: cpp may start writing to stdout
        // before it has fully read stdin, and this process's stdout pipe
        // has a bounded buffer, so writing and waiting on the same thread
        // can deadlock on large inputs.
        let mut stdin = child.stdin.take().expect("piped stdin");
        let source = source.to_string();
        let writer = thread::spawn(move || stdin.write_all(source.as_bytes()));

        let output = child
            .wait_with_output()
            .context("failed to read cpp's output")?;

        writer
            .join()
            .expect("cpp stdin writer thread panicked")
            .context("failed to write source to cpp's stdin")?;

        if !output.status.success() {
            anyhow::bail!(
                "cpp -nostdinc exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            );
        }

        String::from_utf8(output.stdout).context("cpp produced non-UTF-8 output")
    }
}

/// Test-only seam: returns the input unchanged, so unit and integration
/// tests can exercise the parser/codegen on already-preprocessed source
/// text without requiring a real `cpp` on `PATH`.
pub struct IdentityPreprocess;

impl Preprocess for IdentityPreprocess {
    fn run(&self, source: &str) -> Result<String> {
        Ok(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_preprocess_returns_input_unchanged() {
        let src = "nop\nadd r1, r2, r3\n";
        assert_eq!(IdentityPreprocess.run(src).unwrap(), src);
    }
}
