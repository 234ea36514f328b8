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

//! Bit-field layout constants for the 16-bit instruction word.

/// B-mode `10`: B operand is a register in bits [2:0].
pub const B_MODE_REGISTER: u16 = 0b10 << 3;
/// B-mode `11`: the special/16-bit escape.
pub const B_MODE_ESCAPE: u16 = 0b11 << 3;
/// Escape bit [0]: A register is special.
pub const ESCAPE_A_SPECIAL: u16 = 1 << 0;
/// Escape bit [1]: dest register is special.
pub const ESCAPE_D_SPECIAL: u16 = 1 << 1;
/// Escape bit [2]: a trailing 16-bit immediate word follows.
pub const ESCAPE_HAS_IMMEDIATE: u16 = 1 << 2;

/// Lowest register index considered "special" (LR/SP/PC/CR).
pub const FIRST_SPECIAL_REGISTER: u8 = 8;

/// Long branch condition field: all-ones (NV, unconditional-long).
pub const LONG_BRANCH_CONDITION: u16 = 0xF << 10;

/// Inclusive 4-bit signed immediate range accepted by B-mode `00`.
/// Intentionally asymmetric: true two's-complement range is [-8,7], but
/// the reference only ever accepts [-7,7] to keep the `0x8` encoding free.
pub const SHORT_IMMEDIATE_MIN: i32 = -7;
pub const SHORT_IMMEDIATE_MAX: i32 = 7;

/// Short branch operand range accepted during pass 1 encoding.
pub const SHORT_BRANCH_PASS1_MIN: i32 = -512;
pub const SHORT_BRANCH_PASS1_MAX: i32 = 512;

/// Short branch offset range enforced by the pass 2 fixup resolver. This
/// is narrower than the pass-1 bound above; the asymmetry is intentional
/// and must not be "fixed" by widening this one.
pub const SHORT_BRANCH_PASS2_MIN: i32 = -256;
pub const SHORT_BRANCH_PASS2_MAX: i32 = 256;
