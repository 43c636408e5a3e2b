//! Identifier interning.
//!
//! An [`Identifier`] is a compact, `Copy` handle to an interned piece of
//! identifier text. Two identifiers compare equal iff they were interned
//! into the same [`IdentifierPool`] and refer to the same text — equality
//! never touches the underlying string.
//!
//! Unlike a compiler-wide interner, an [`IdentifierPool`] is owned by a
//! single [`crate::diagnostic`]-adjacent consumer (in this workspace, one
//! per semantic model) and is not `Sync`. The binder is a single-threaded
//! tree walk (nothing here spans threads), so there is no DashMap, no
//! atomics, and no global table to initialize before first use.

use indexmap::IndexSet;
use static_assertions::assert_eq_size;

/// A handle to interned identifier text.
///
/// `Identifier::EMPTY` is always index `0` in any [`IdentifierPool`] — the
/// pool interns `""` as its very first entry, so the empty identifier is
/// guaranteed to compare equal across independently constructed pools too,
/// which matters for tests that build two pools and expect their anonymous
/// declarations to line up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    index: u32,
}

assert_eq_size!(Identifier, u32);

impl Identifier {
    /// The reserved "no name" identifier.
    pub const EMPTY: Identifier = Identifier { index: 0 };

    #[inline]
    fn from_index(index: usize) -> Self {
        Identifier {
            index: index as u32,
        }
    }

    /// Returns `true` if this identifier is the empty/"no name" sentinel.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Identifier::EMPTY
    }
}

/// Owns the interned text behind every [`Identifier`] handed out from it.
///
/// A pool always starts with `""` pre-interned at index `0`, so a freshly
/// constructed pool's `Identifier::EMPTY` is valid without any caller action.
pub struct IdentifierPool {
    strings: IndexSet<Box<str>>,
}

impl IdentifierPool {
    /// Creates a pool with only the empty identifier interned.
    pub fn new() -> Self {
        let mut strings = IndexSet::new();
        strings.insert(Box::from(""));
        IdentifierPool { strings }
    }

    /// Interns `text`, returning a stable handle to it.
    ///
    /// Interning the same text twice returns the same `Identifier`.
    pub fn intern(&mut self, text: &str) -> Identifier {
        if let Some(index) = self.strings.get_index_of(text) {
            return Identifier::from_index(index);
        }
        let (index, _) = self.strings.insert_full(Box::from(text));
        Identifier::from_index(index)
    }

    /// Resolves an identifier back to its text.
    ///
    /// Panics if `id` was not produced by this pool — an `Identifier` from
    /// a different pool is a caller bug, not a reportable condition.
    pub fn resolve(&self, id: Identifier) -> &str {
        self.strings
            .get_index(id.index as usize)
            .unwrap_or_else(|| panic!("identifier {:?} does not belong to this pool", id))
    }

    /// Number of distinct strings interned, including the empty sentinel.
    pub fn len(&self) -> usize {
        self.strings.len()
    }
}

impl Default for IdentifierPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_pre_interned() {
        let pool = IdentifierPool::new();
        assert_eq!(pool.resolve(Identifier::EMPTY), "");
        assert!(Identifier::EMPTY.is_empty());
    }

    #[test]
    fn interning_same_text_yields_same_handle() {
        let mut pool = IdentifierPool::new();
        let a = pool.intern("foo");
        let b = pool.intern("foo");
        assert_eq!(a, b);
    }

    #[test]
    fn interning_distinct_text_yields_distinct_handles() {
        let mut pool = IdentifierPool::new();
        let a = pool.intern("foo");
        let b = pool.intern("bar");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_handle_is_stable_across_pools() {
        let mut pool_a = IdentifierPool::new();
        let mut pool_b = IdentifierPool::new();
        assert_eq!(pool_a.intern(""), pool_b.intern(""));
        assert_eq!(pool_a.intern(""), Identifier::EMPTY);
    }

    #[test]
    fn resolve_round_trips() {
        let mut pool = IdentifierPool::new();
        let id = pool.intern("variable_name");
        assert_eq!(pool.resolve(id), "variable_name");
    }

    #[test]
    #[should_panic]
    fn resolve_panics_on_foreign_handle() {
        let mut pool_a = IdentifierPool::new();
        let pool_b = IdentifierPool::new();
        let id = pool_a.intern("only_in_a");
        pool_b.resolve(id);
    }
}
