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

//! Exercises the on-disk side of the pipeline `main.rs` drives: reading a
//! source file and writing the three output files, per the "any subset,
//! including none, may be given" contract. Uses `IdentityPreprocess`
//! rather than `CppPreprocess` so this doesn't depend on a real `cpp`
//! binary being on `PATH` in the test environment.

use std::fs;

use asm16::emitters::{emit_binary, emit_hex, emit_hex2};
use asm16::preprocessor::IdentityPreprocess;
use tempfile::tempdir;

#[test]
fn assembling_a_file_and_writing_all_three_outputs_round_trips() {
    let dir = tempdir().unwrap();
    let src_path = dir.path().join("prog.s");
    fs::write(&src_path, "start:\nadd r1, r2, r3\nb start\n").unwrap();

    let source = fs::read_to_string(&src_path).unwrap();
    let out = asm16::assemble(&source, &IdentityPreprocess, 0).unwrap();

    let bin_path = dir.path().join("prog.bin");
    let hex_path = dir.path().join("prog.hex");
    let hex2_path = dir.path().join("prog.hex2");

    fs::write(&bin_path, emit_binary(&out)).unwrap();
    fs::write(&hex_path, emit_hex(&out)).unwrap();
    fs::write(&hex2_path, emit_hex2(&out)).unwrap();

    let binary_bytes = fs::read(&bin_path).unwrap();
    let word_count: usize = out.iter().map(|e| e.length() as usize).sum();
    assert_eq!(binary_bytes.len(), word_count * 2);

    let hex_text = fs::read_to_string(&hex_path).unwrap();
    assert_eq!(hex_text.lines().count(), word_count);

    let hex2_text = fs::read_to_string(&hex2_path).unwrap();
    assert!(hex2_text.lines().all(|l| l.trim_start().starts_with("0x")));
}

#[test]
fn only_the_requested_output_paths_are_written() {
    let dir = tempdir().unwrap();
    let source = "nop\n";
    let out = asm16::assemble(source, &IdentityPreprocess, 0).unwrap();

    let bin_path = dir.path().join("only.bin");
    fs::write(&bin_path, emit_binary(&out)).unwrap();

    assert!(bin_path.exists());
    assert!(!dir.path().join("only.hex").exists());
}
