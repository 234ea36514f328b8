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

use crate::errors::AssemblyError;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub addr: u16,
    pub resolved: bool,
}

/// A stable handle into the symbol table. Pass 1 records `SymbolId`s
/// inside fixups rather than references, so pass 2 can mutate the
/// underlying `Symbol` in place and every fixup sees the update.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SymbolId(usize);

#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    by_name: HashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `name` at `addr`. A second definition of an already-resolved
    /// label is a hard error; a name seen only via `get_symbol_ref` so far
    /// is resolved in place.
    pub fn add_label(&mut self, name: &str, addr: u16, line: usize) -> Result<(), AssemblyError> {
        if let Some(&id) = self.by_name.get(name) {
            let sym = &mut self.symbols[id.0];
            if sym.resolved {
                return Err(AssemblyError::DuplicateLabel {
                    line,
                    name: name.to_string(),
                });
            }
            sym.addr = addr;
            sym.resolved = true;
        } else {
            let id = SymbolId(self.symbols.len());
            self.symbols.push(Symbol {
                name: name.to_string(),
                addr,
                resolved: true,
            });
            self.by_name.insert(name.to_string(), id);
        }
        Ok(())
    }

    /// Returns a stable reference to `name`'s symbol, creating an
    /// unresolved placeholder the first time it's seen.
    pub fn get_symbol_ref(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = SymbolId(self.symbols.len());
        self.symbols.push(Symbol {
            name: name.to_string(),
            addr: 0,
            resolved: false,
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    /// Every symbol still unresolved once pass 2 finishes walking the
    /// output buffer is a dangling reference.
    pub fn unresolved(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().filter(|s| !s.resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_reference_resolves_to_the_same_id() {
        let mut table = SymbolTable::new();
        let id = table.get_symbol_ref("loop");
        assert!(!table.get(id).resolved);

        table.add_label("loop", 0x10, 1).unwrap();
        assert!(table.get(id).resolved);
        assert_eq!(table.get(id).addr, 0x10);
    }

    #[test]
    fn redefining_a_resolved_label_is_an_error() {
        let mut table = SymbolTable::new();
        table.add_label("start", 0, 1).unwrap();
        let err = table.add_label("start", 4, 2).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::DuplicateLabel {
                line: 2,
                name: "start".to_string()
            }
        );
    }

    #[test]
    fn unresolved_symbols_are_reported() {
        let mut table = SymbolTable::new();
        table.get_symbol_ref("missing");
        assert_eq!(table.unresolved().count(), 1);
    }
}
