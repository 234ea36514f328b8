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

//! End-to-end scenarios: full source strings through
//! `assemble` to the final emitted bytes, using `IdentityPreprocess` so
//! these don't depend on a real `cpp` being on `PATH`.

use asm16::assemble;
use asm16::emitters::{emit_binary, emit_hex, emit_hex2};
use asm16::preprocessor::IdentityPreprocess;

fn words(src: &str) -> Vec<u16> {
    let out = assemble(src, &IdentityPreprocess, 0).unwrap();
    out.iter().flat_map(|e| e.words()).collect()
}

fn binary(src: &str) -> Vec<u8> {
    emit_binary(&assemble(src, &IdentityPreprocess, 0).unwrap())
}

#[test]
fn nop_produces_two_zero_bytes() {
    assert_eq!(binary("nop\n"), vec![0x00, 0x00]);
}

#[test]
fn add_three_registers_matches_the_reference_bit_layout() {
    assert_eq!(words("add r1, r2, r3\n"), vec![0x0944]);
}

#[test]
fn self_branch_label_is_long_form_with_offset_minus_two() {
    let w = words("label: b label\n");
    assert_eq!(w.len(), 2);
    assert_eq!(w[1], 0xFFFE);
}

#[test]
fn asciiz_emits_chars_then_a_terminating_zero() {
    assert_eq!(words(".asciiz \"AB\"\n"), vec![0x0041, 0x0042, 0x0000]);
}

#[test]
fn mov_large_immediate_uses_the_escape_form() {
    let w = words("mov r1, 0x1234\n");
    assert_eq!(w.len(), 2);
    assert_eq!(w[1], 0x1234);
    assert_eq!(w[0] & (1 << 8), 1 << 8); // dest=1 in bits [10:8]
    assert_eq!(w[0] & 0b11000, 0b11000); // B-mode escape
    assert_eq!(w[0] & 0b100, 0b100); // trailing immediate present
}

#[test]
fn ldr_indexed_immediate_fits_one_word() {
    assert_eq!(
        words("ldr r1, r2, 4\n"),
        vec![(0b01100 << 11) | (1 << 8) | (2 << 5) | 0x4]
    );
}

#[test]
fn forward_reference_to_a_later_label_resolves_across_statements() {
    let w = words("beq done\nnop\ndone:\nnop\n");
    // beq is short-form, one word; two nops follow.
    assert_eq!(w.len(), 3);
}

#[test]
fn backward_reference_offset_is_negative() {
    // start: nop ; b start  -> offset = 0 - (1 + 2) = -3
    let w = words("start:\nnop\nb start\n");
    assert_eq!(w.len(), 3); // nop (1 word) + long branch (2 words)
    assert_eq!(w[2], (-3i32 as u32 & 0xFFFF) as u16);
}

#[test]
fn duplicate_label_halts_assembly_with_an_error() {
    let err = assemble("a:\na:\n", &IdentityPreprocess, 0).unwrap_err();
    assert!(format!("{:#}", err).contains("already defined"));
}

#[test]
fn unresolved_forward_reference_is_reported() {
    let err = assemble("b nowhere\n", &IdentityPreprocess, 0).unwrap_err();
    assert!(format!("{:#}", err).contains("never defined"));
}

#[test]
fn hex_listing_and_binary_agree_on_word_count() {
    let out = assemble("add r1, r2, r3\nmov r1, 0x1234\n", &IdentityPreprocess, 0).unwrap();
    let bin = emit_binary(&out);
    let hex = emit_hex(&out);
    let word_count: usize = out.iter().map(|e| e.length() as usize).sum();
    assert_eq!(bin.len(), word_count * 2);
    assert_eq!(hex.lines().count(), word_count);
}

#[test]
fn hex2_listing_uses_comma_suffixed_c_array_syntax() {
    let out = assemble("nop\n", &IdentityPreprocess, 0).unwrap();
    let hex2 = emit_hex2(&out);
    assert!(hex2.starts_with("0x0000,"));
}

#[test]
fn repeated_assembly_of_the_same_source_is_deterministic() {
    let src = "start:\nadd r1, r2, r3\nbeq start\nmov r3, 0x4000\nb start\n";
    let a = assemble(src, &IdentityPreprocess, 0).unwrap();
    let b = assemble(src, &IdentityPreprocess, 0).unwrap();
    assert_eq!(emit_binary(&a), emit_binary(&b));
    assert_eq!(emit_hex(&a), emit_hex(&b));
    assert_eq!(emit_hex2(&a), emit_hex2(&b));
}

#[test]
fn two_arg_form_matches_the_fully_spelled_three_arg_form() {
    let two = words("add r1, r2\n");
    let three = words("add r1, r1, r2\n");
    assert_eq!(two, three);
}

#[test]
fn not_pseudo_instruction_matches_xor_with_minus_one() {
    let not_form = words("not r1, r2\n");
    let xor_form = words("xor r1, r2, -1\n");
    assert_eq!(not_form, xor_form);
}

#[test]
fn linemarkers_are_consumed_and_never_reach_codegen() {
    let w = words("nop\n# 42 \"included.s\"\nnop\n");
    assert_eq!(w.len(), 2);
}

#[test]
fn addresses_accumulate_across_mixed_instruction_and_data_entries() {
    let out = assemble(
        ".word 1\nnop\n.asciiz \"A\"\nnop\n",
        &IdentityPreprocess,
        0,
    )
    .unwrap();
    let mut expected_addr = 0u16;
    for entry in &out {
        assert_eq!(entry.addr(), expected_addr);
        expected_addr += entry.length();
    }
}
