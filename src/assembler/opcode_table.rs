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

//! Static mnemonic -> encoding-shape table. Real opcodes and
//! pseudo-instructions (which reuse a real opcode under a constrained
//! argument pattern) live side by side here, exactly as in the reference
//! assembler.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Broad instruction category; selects which half of the encoder a
/// mnemonic's table entry is dispatched to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IType {
    Alu,
    ShortBranch,
    ShortOrLongBranch,
    LongBranch,
}

/// Argument shape: how a mnemonic's surface operands map onto the
/// dest/a/b triple the ALU encoder works with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AType {
    None,
    Dab,
    DabLs,
    Db,
    D,
    DaMinus1,
    Ab,
}

#[derive(Debug, Copy, Clone)]
pub struct OpcodeEntry {
    pub opcode: u16,
    pub itype: IType,
    pub atype: AType,
    /// `neg`'s lone operand must always land in B, never A, even when it's
    /// a register (`neg d, r` means `sub d, r0, r`, not `sub d, r, r0`).
    pub force_b: bool,
}

const fn entry(opcode: u16, itype: IType, atype: AType) -> OpcodeEntry {
    OpcodeEntry {
        opcode,
        itype,
        atype,
        force_b: false,
    }
}

const fn entry_force_b(opcode: u16, itype: IType, atype: AType) -> OpcodeEntry {
    OpcodeEntry {
        opcode,
        itype,
        atype,
        force_b: true,
    }
}

const fn group(bits: u16) -> u16 {
    bits << 11
}

const fn branch_cc(cc: u16) -> u16 {
    group(0b10000) | (cc << 10)
}

fn build_table() -> HashMap<&'static str, OpcodeEntry> {
    use AType::*;
    use IType::*;

    let mut t = HashMap::new();

    t.insert("mov", entry(group(0b00000), Alu, Db));
    t.insert("add", entry(group(0b00001), Alu, Dab));
    t.insert("adc", entry(group(0b00010), Alu, Dab));
    t.insert("sub", entry(group(0b00011), Alu, Dab));
    t.insert("sbc", entry(group(0b00100), Alu, Dab));
    t.insert("and", entry(group(0b00101), Alu, Dab));
    t.insert("or", entry(group(0b00110), Alu, Dab));
    t.insert("xor", entry(group(0b00111), Alu, Dab));
    t.insert("lsl", entry(group(0b01000), Alu, Dab));
    t.insert("lsr", entry(group(0b01001), Alu, Dab));
    t.insert("asr", entry(group(0b01010), Alu, Dab));
    t.insert("ror", entry(group(0b01011), Alu, Dab));

    t.insert("ldr", entry(group(0b01100), Alu, DabLs));
    t.insert("str", entry(group(0b01101), Alu, DabLs));

    t.insert("beq", entry(branch_cc(0b0000), ShortBranch, D));
    t.insert("bne", entry(branch_cc(0b0001), ShortBranch, D));
    t.insert("bcs", entry(branch_cc(0b0010), ShortBranch, D));
    t.insert("bhs", entry(branch_cc(0b0010), ShortBranch, D)); // alias of bcs
    t.insert("bcc", entry(branch_cc(0b0011), ShortBranch, D));
    t.insert("blo", entry(branch_cc(0b0011), ShortBranch, D)); // alias of bcc
    t.insert("bmi", entry(branch_cc(0b0100), ShortBranch, D));
    t.insert("bpl", entry(branch_cc(0b0101), ShortBranch, D));
    t.insert("bvs", entry(branch_cc(0b0110), ShortBranch, D));
    t.insert("bvc", entry(branch_cc(0b0111), ShortBranch, D));
    t.insert("bhi", entry(branch_cc(0b1000), ShortBranch, D));
    t.insert("bls", entry(branch_cc(0b1001), ShortBranch, D));
    t.insert("bge", entry(branch_cc(0b1010), ShortBranch, D));
    t.insert("blt", entry(branch_cc(0b1011), ShortBranch, D));
    t.insert("bgt", entry(branch_cc(0b1100), ShortBranch, D));
    t.insert("ble", entry(branch_cc(0b1101), ShortBranch, D));
    t.insert("b", entry(branch_cc(0b1110), ShortOrLongBranch, D));
    t.insert("bl", entry(branch_cc(0b1110) | (1 << 9), LongBranch, D));

    t.insert("nop", entry(group(0b00000), Alu, None)); // mov r0, r0

    t.insert("neg", entry_force_b(group(0b00011), Alu, Db)); // sub d, r0, b
    t.insert("not", entry(group(0b00111), Alu, DaMinus1)); // xor d, a, #-1
    t.insert("teq", entry(group(0b00111), Alu, Ab)); // xor r0, a, b
    t.insert("tst", entry(group(0b00101), Alu, Ab)); // and r0, a, b
    t.insert("cmp", entry(group(0b00011), Alu, Ab)); // sub r0, a, b
    t.insert("cmn", entry(group(0b00001), Alu, Ab)); // add r0, a, b

    t
}

static TABLE: OnceLock<HashMap<&'static str, OpcodeEntry>> = OnceLock::new();

pub fn lookup(mnemonic: &str) -> Option<OpcodeEntry> {
    TABLE.get_or_init(build_table).get(mnemonic).copied()
}
