//! Sharded symbol table with per-symbol reservation tags.
//!
//! Provides O(1) interning and lookup with thread-safe concurrent access
//! via per-shard locking. Every symbol carries a [`Reservation`] next to its
//! text, so classifying an already-interned identifier is a single indexed
//! read.
//!
//! Tags can only be written from inside this crate; the mode switch in
//! [`crate::Session`] is the one caller.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use twain_ir::{Name, Reservation};

/// An interned string and its current reservation tag.
#[derive(Copy, Clone)]
struct Symbol {
    text: &'static str,
    reserved: Reservation,
}

/// Per-shard storage for interned symbols.
struct SymbolShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    symbols: Vec<Symbol>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded capacity.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "symbol shard {shard_idx} exceeded capacity: {count} symbols, max is {}",
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

impl SymbolShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            symbols: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        // Empty string lives at index 0 of shard 0
        shard.map.insert("", 0);
        shard.symbols.push(Symbol {
            text: "",
            reserved: Reservation::Unreserved,
        });
        shard
    }
}

/// Sharded symbol table for one lexing session.
///
/// # Thread Safety
/// Uses `RwLock` per shard. Interning from several threads is safe; the
/// consistency of reservation tags across shards is the session's concern.
pub struct SymbolTable {
    shards: [RwLock<SymbolShard>; Name::NUM_SHARDS],
    /// Total count of interned symbols across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl SymbolTable {
    pub(crate) fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(SymbolShard::with_empty())
            } else {
                RwLock::new(SymbolShard::new())
            }
        });

        Self {
            shards,
            total_count: AtomicUsize::new(1),
        }
    }

    /// Compute shard for a string based on its hash.
    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    ///
    /// New symbols start out [`Reservation::Unreserved`].
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        // Fast path: already interned
        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(s) {
                return Ok(Name::new(shard_idx_u32, local));
            }
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(shard_idx_u32, local));
        }

        let count = guard.symbols.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard_idx, count })?;

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.symbols.push(Symbol {
            text: leaked,
            reserved: Reservation::Unreserved,
        });
        guard.map.insert(leaked, local);

        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(shard_idx_u32, local))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Find an already-interned string without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let guard = self.shards[shard_idx].read();
        guard
            .map
            .get(s)
            .map(|&local| Name::new(shard_idx_u32, local))
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this table.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards[name.shard()].read().symbols[name.local()].text
    }

    /// Current reservation tag of a symbol.
    ///
    /// Reads one tag without the session's mode register. Consistent views
    /// across several symbols go through [`crate::Classifier`].
    ///
    /// # Panics
    /// Panics if `name` was not produced by this table.
    #[inline]
    pub(crate) fn reservation(&self, name: Name) -> Reservation {
        self.shards[name.shard()].read().symbols[name.local()].reserved
    }

    /// Retag a symbol.
    ///
    /// Callers must hold the session's mode register for writing.
    pub(crate) fn set_reservation(&self, name: Name, reserved: Reservation) {
        self.shards[name.shard()].write().symbols[name.local()].reserved = reserved;
    }

    /// Get the number of interned symbols (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the table only holds the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twain_ir::Keyword;

    #[test]
    fn test_intern_and_lookup() {
        let table = SymbolTable::new();

        let hello = table.intern("hello");
        let world = table.intern("world");
        let hello2 = table.intern("hello");

        assert_eq!(hello, hello2);
        assert_ne!(hello, world);

        assert_eq!(table.lookup(hello), "hello");
        assert_eq!(table.lookup(world), "world");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_empty_string() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.intern(""), Name::EMPTY);
        assert_eq!(table.lookup(Name::EMPTY), "");
    }

    #[test]
    fn test_get_does_not_insert() {
        let table = SymbolTable::new();
        assert_eq!(table.get("missing"), None);
        assert_eq!(table.len(), 1);

        let name = table.intern("present");
        assert_eq!(table.get("present"), Some(name));
    }

    #[test]
    fn test_new_symbols_are_unreserved() {
        let table = SymbolTable::new();
        let name = table.intern("operator");
        assert_eq!(table.reservation(name), Reservation::Unreserved);
    }

    #[test]
    fn test_set_reservation_is_per_symbol() {
        let table = SymbolTable::new();
        let op = table.intern("operator");
        let other = table.intern("operand");

        table.set_reservation(op, Reservation::Keyword(Keyword::Operator));

        assert_eq!(
            table.reservation(op),
            Reservation::Keyword(Keyword::Operator)
        );
        assert_eq!(table.reservation(other), Reservation::Unreserved);

        // Re-interning keeps the tag: identity is stable
        assert_eq!(
            table.reservation(table.intern("operator")),
            Reservation::Keyword(Keyword::Operator)
        );
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_foreign_name_panics_on_lookup() {
        let table = SymbolTable::new();
        table.lookup(Name::new(15, 1000));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_foreign_name_panics_on_reservation() {
        let table = SymbolTable::new();
        table.reservation(Name::new(15, 1000));
    }

    #[test]
    fn test_overflow_message() {
        let err = InternError::ShardOverflow {
            shard_idx: 3,
            count: 10,
        };
        assert!(err.to_string().starts_with("symbol shard 3 exceeded capacity"));
    }
}
