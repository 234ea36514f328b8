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

//! The three writers over the final output buffer: raw
//! big-endian binary, a plain hex listing, and a comma-suffixed
//! ("C array initializer") alternate hex listing. All three walk the
//! buffer in emission order; none re-derive anything the codegen didn't
//! already compute.

use crate::assembler::output::OutputEntry;

/// Pure big-endian word stream: two bytes per word, high byte first, no
/// header, footer, or alignment padding. File size is `2 * sum(length)`.
pub fn emit_binary(entries: &[OutputEntry]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(entries.iter().map(|e| e.length() as usize * 2).sum());
    for entry in entries {
        for word in entry.words() {
            bytes.push((word >> 8) as u8);
            bytes.push((word & 0xFF) as u8);
        }
    }
    bytes
}

/// Plain hex listing: one `%04x` word per line, the entry's first word
/// annotated with its address and reconstructed source text.
pub fn emit_hex(entries: &[OutputEntry]) -> String {
    render(entries, |word| format!("{:04x}", word), "// ")
}

/// Alternate hex listing: each word rendered as a C array initializer
/// element (`0x%04x,`).
pub fn emit_hex2(entries: &[OutputEntry]) -> String {
    render(entries, |word| format!("0x{:04x},", word), "// ")
}

fn render(entries: &[OutputEntry], format_word: impl Fn(u16) -> String, comment: &str) -> String {
    let mut out = String::new();
    for entry in entries {
        let words = entry.words();
        for (i, word) in words.iter().enumerate() {
            out.push_str(&format_word(*word));
            if i == 0 {
                out.push_str(&format!(
                    "           {}0x{:04x} {}",
                    comment,
                    entry.addr(),
                    entry.text()
                ));
            }
            out.push('\n');
        }
    }
    out
}
