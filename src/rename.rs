//! Run-scoped rename tables.
//!
//! Two maps keyed by original name: one for function definitions, one for
//! identifiers. An entry is created the first time a name is seen and
//! returned unchanged on every later lookup, so all occurrences of one
//! original name converge on one replacement. Scope is not modeled: two
//! unrelated variables that share a name share a replacement.

use crate::names::NameGenerator;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RenameTable {
    functions: HashMap<String, String>,
    identifiers: HashMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a function rename. A later definition with the same original
    /// name overwrites the entry, since every definition gets its own name.
    pub fn record_function(&mut self, original: &str, replacement: &str) {
        self.functions
            .insert(original.to_string(), replacement.to_string());
    }

    pub fn function(&self, original: &str) -> Option<&str> {
        self.functions.get(original).map(String::as_str)
    }

    /// Replacement for an identifier, minting one on first sight.
    /// Returns the replacement and whether it was newly created.
    pub fn identifier(&mut self, original: &str, names: &mut NameGenerator) -> (String, bool) {
        if let Some(existing) = self.identifiers.get(original) {
            return (existing.clone(), false);
        }
        let fresh = names.fresh_name();
        self.identifiers.insert(original.to_string(), fresh.clone());
        (fresh, true)
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn identifier_count(&self) -> usize {
        self.identifiers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_entry_created_once() {
        let mut table = RenameTable::new();
        let mut names = NameGenerator::new(Some(0), 10);
        let (first, created) = table.identifier("x", &mut names);
        assert!(created);
        let (second, created) = table.identifier("x", &mut names);
        assert!(!created);
        assert_eq!(first, second);
        assert_eq!(table.identifier_count(), 1);
    }

    #[test]
    fn distinct_names_get_entries() {
        let mut table = RenameTable::new();
        let mut names = NameGenerator::new(Some(0), 10);
        table.identifier("x", &mut names);
        table.identifier("y", &mut names);
        assert_eq!(table.identifier_count(), 2);
    }

    #[test]
    fn function_and_identifier_tables_are_separate() {
        let mut table = RenameTable::new();
        let mut names = NameGenerator::new(Some(0), 10);
        table.record_function("f", "renamedfn1");
        assert_eq!(table.function("f"), Some("renamedfn1"));
        assert_eq!(table.identifier_count(), 0);
        let (ident, created) = table.identifier("f", &mut names);
        assert!(created);
        assert_ne!(ident, "renamedfn1");
    }

    #[test]
    fn function_record_overwrites() {
        let mut table = RenameTable::new();
        table.record_function("f", "a");
        table.record_function("f", "b");
        assert_eq!(table.function("f"), Some("b"));
        assert_eq!(table.function_count(), 1);
    }
}
