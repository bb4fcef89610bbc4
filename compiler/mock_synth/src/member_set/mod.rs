//! Insertion-ordered set keyed by member identity.
//!
//! Flattening needs set semantics (a member redeclared on two inheritance
//! paths is kept once) and a stable order (emitted stubs must not change from
//! run to run). A hash set alone gives the first, a `Vec` alone the second.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Ordered set of `T`, deduplicated by a separate key `K`.
///
/// The first value inserted under a key wins; later inserts under the same
/// key are ignored, but callers may still merge into the kept value through
/// [`get_mut`](Self::get_mut).
#[derive(Clone, Debug)]
pub struct MemberSet<K, T> {
    index: FxHashMap<K, usize>,
    items: Vec<T>,
}

impl<K, T> Default for MemberSet<K, T> {
    fn default() -> Self {
        MemberSet {
            index: FxHashMap::default(),
            items: Vec::new(),
        }
    }
}

impl<K: Hash + Eq, T> MemberSet<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` under `key`. Returns `false` if the key was present.
    pub fn insert(&mut self, key: K, item: T) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.items.len());
        self.items.push(item);
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        let &i = self.index.get(key)?;
        self.items.get_mut(i)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
