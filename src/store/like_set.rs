// ============================================================================
// togglesets - LikeSet
// An immutable snapshot of one domain's liked keys
// ============================================================================

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set::Iter;
use std::hash::Hash;

use crate::core::types::EntityKey;

#[cfg(not(feature = "sync"))]
type SharedSet = std::rc::Rc<HashSet<EntityKey>>;

#[cfg(feature = "sync")]
type SharedSet = std::sync::Arc<HashSet<EntityKey>>;

// =============================================================================
// LIKE SET
// =============================================================================

/// The set of keys currently liked within one domain, frozen at a point in
/// time.
///
/// A `LikeSet` is a snapshot, not a live view: the store never mutates a set
/// in place, it installs a wholly new one on every toggle. Cloning a snapshot
/// shares the underlying storage, so holding one across further toggles is
/// cheap and always consistent.
///
/// With the `sync` feature the shared storage is an `Arc`, making snapshots
/// `Send + Sync` so they can be handed to other threads (the store itself
/// stays single-threaded either way).
///
/// # Example
///
/// ```
/// use togglesets::{Domain, ToggleSetStore};
///
/// let mut store = ToggleSetStore::new();
///
/// let before = store.snapshot(&Domain::VEHICLES);
/// let after = store.toggle(&Domain::VEHICLES, "car-42");
///
/// // The old snapshot still describes the pre-toggle world.
/// assert!(!before.contains("car-42"));
/// assert!(after.contains("car-42"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeSet {
    items: SharedSet,
}

impl LikeSet {
    /// An empty snapshot.
    pub fn empty() -> Self {
        LikeSet {
            items: SharedSet::new(HashSet::new()),
        }
    }

    pub(crate) fn from_set(items: HashSet<EntityKey>) -> Self {
        LikeSet {
            items: SharedSet::new(items),
        }
    }

    /// Returns true if `key` is a member of this snapshot.
    ///
    /// Accepts anything the key type borrows as, so a plain `&str` probes
    /// the set without allocating.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        EntityKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains(key)
    }

    /// Number of liked keys in this snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is liked in this snapshot.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the liked keys (arbitrary order).
    pub fn iter(&self) -> Iter<'_, EntityKey> {
        self.items.iter()
    }

    /// Produce the snapshot that results from flipping `key`'s membership.
    ///
    /// Returns the new snapshot and whether `key` is liked in it. The
    /// receiver is left untouched.
    pub(crate) fn with_toggled(&self, key: EntityKey) -> (LikeSet, bool) {
        let mut items: HashSet<EntityKey> = (*self.items).clone();
        let now_liked = if items.remove(&key) {
            false
        } else {
            items.insert(key);
            true
        };
        (LikeSet::from_set(items), now_liked)
    }
}

impl Default for LikeSet {
    fn default() -> Self {
        LikeSet::empty()
    }
}

impl FromIterator<EntityKey> for LikeSet {
    fn from_iter<I: IntoIterator<Item = EntityKey>>(iter: I) -> Self {
        LikeSet::from_set(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LikeSet {
    type Item = &'a EntityKey;
    type IntoIter = Iter<'a, EntityKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
