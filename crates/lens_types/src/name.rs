//! Interned string identifier.
//!
//! A compact 32-bit handle into the catalog's `NameTable`. The table is
//! populated while the catalog is built (single-threaded) and only read
//! afterwards, so no sharding or locking is needed.

use rustc_hash::FxHashMap;
use std::fmt;

/// Interned string identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Append-only string table backing `Name` handles.
#[derive(Debug, Default)]
pub struct NameTable {
    map: FxHashMap<String, u32>,
    strings: Vec<String>,
}

impl NameTable {
    /// Create a table with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let mut table = NameTable {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        table.map.insert(String::new(), 0);
        table.strings.push(String::new());
        table
    }

    /// Intern a string, returning its stable handle.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&idx) = self.map.get(s) {
            return Name(idx);
        }
        let idx = u32::try_from(self.strings.len()).unwrap_or(u32::MAX);
        self.map.insert(s.to_owned(), idx);
        self.strings.push(s.to_owned());
        Name(idx)
    }

    /// Resolve a handle back to its string content.
    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }

    /// Look up an already-interned string without inserting.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).map(|&idx| Name(idx))
    }

    /// Number of interned strings (including the empty string).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn intern_is_stable_and_deduplicating() {
        let mut table = NameTable::new();
        let a = table.intern("Widget");
        let b = table.intern("Gadget");
        let a2 = table.intern("Widget");

        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(table.resolve(a), "Widget");
        assert_eq!(table.resolve(b), "Gadget");
    }

    #[test]
    fn empty_string_is_preinterned() {
        let mut table = NameTable::new();
        assert_eq!(table.intern(""), Name::EMPTY);
        assert_eq!(table.resolve(Name::EMPTY), "");
    }

    #[test]
    fn get_does_not_insert() {
        let mut table = NameTable::new();
        assert_eq!(table.get("missing"), None);
        let n = table.intern("present");
        assert_eq!(table.get("present"), Some(n));
    }
}
