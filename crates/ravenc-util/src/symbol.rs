//! Symbol module - string interning for efficient identifier handling.
//!
//! Every identifier in the AST (class names, field names, method names,
//! variable names) is an interned [`Symbol`] rather than a `String`, so
//! comparisons during name resolution are O(1) index comparisons instead
//! of string comparisons.

use ahash::AHasher;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

static STRING_TABLE: Lazy<StringTable> = Lazy::new(StringTable::new);

struct StringTable {
    map: DashMap<u64, (&'static str, u32)>,
    next_index: AtomicU32,
}

impl StringTable {
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity(256),
            next_index: AtomicU32::new(0),
        }
    }

    fn hash_str(s: &str) -> u64 {
        let mut hasher = AHasher::default();
        s.hash(&mut hasher);
        hasher.finish()
    }

    fn intern(&self, s: &str) -> u32 {
        let hash = Self::hash_str(s);
        if let Some(entry) = self.map.get(&hash) {
            if entry.0 == s {
                return entry.1;
            }
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = self.next_index.fetch_add(1, Ordering::SeqCst);
        self.map.insert(hash, (leaked, idx));
        idx
    }

    /// `None` only if `idx` was never handed out by `intern` — which a
    /// caller holding a `Symbol` can't produce, since its inner index is
    /// private and `Symbol::intern` is the only constructor. The table
    /// itself never removes entries, so an index it did hand out always
    /// resolves.
    fn resolve(&self, idx: u32) -> Option<&'static str> {
        self.map
            .iter()
            .find(|entry| entry.value().1 == idx)
            .map(|entry| entry.value().0)
    }
}

/// A compact (4-byte) handle to an interned string.
///
/// The inner index is private and the only way to construct a `Symbol`
/// is [`Symbol::intern`], which always inserts into the global table
/// before handing back the index — so unlike a deserialized handle
/// crossing a process boundary, a `Symbol` value in this program can
/// never name an index the table doesn't have. `as_str` relies on that
/// and resolves unconditionally rather than threading an `Option`
/// through every caller for a case that can't occur.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl Symbol {
    pub fn intern(s: &str) -> Self {
        Symbol(STRING_TABLE.intern(s))
    }

    pub fn as_str(&self) -> &'static str {
        STRING_TABLE
            .resolve(self.0)
            .expect("Symbol's only constructor always interns before returning an index")
    }

    /// Case-sensitive comparison against a raw string.
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// Case-insensitive comparison, used for the handful of places that
    /// need it: class-name keying, the return-value pseudovariable check.
    pub fn eq_str_insensitive(&self, other: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(other)
    }

    pub fn eq_insensitive(&self, other: Symbol) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
