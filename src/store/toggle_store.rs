// ============================================================================
// togglesets - ToggleSetStore
// Per-domain liked-key bookkeeping with snapshot-replacing toggles
// ============================================================================

use std::collections::HashMap;

use crate::core::types::{Domain, EntityKey};
use crate::store::like_set::LikeSet;
use crate::watch::{Subscription, ToggleEvent, WatchRegistry};

// =============================================================================
// TOGGLE SET STORE
// =============================================================================

/// Session-scoped store of liked entity keys, partitioned by [`Domain`].
///
/// The store is an explicit, constructed object: create one per session and
/// pass it by reference to whatever needs it. Every domain starts empty and
/// springs into existence the first time it is toggled; querying a domain
/// that was never touched simply answers `false`.
///
/// [`toggle`](Self::toggle) is the sole per-key mutation. It never mutates
/// the current set in place; it installs a wholly new [`LikeSet`] snapshot,
/// so previously handed-out snapshots keep describing the state they were
/// taken in.
///
/// All operations are total: any domain and any key value are accepted, and
/// nothing can fail. The store knows nothing about the entities behind the
/// keys, only about liked-key bookkeeping.
///
/// # Example
///
/// ```
/// use togglesets::{Domain, ToggleSetStore};
///
/// let mut store = ToggleSetStore::new();
///
/// store.toggle(&Domain::VEHICLES, "car-42");
/// assert!(store.is_liked(&Domain::VEHICLES, "car-42"));
///
/// // Same key, different domain: untouched.
/// assert!(!store.is_liked(&Domain::SERVICES, "car-42"));
///
/// // Toggle is self-inverse.
/// store.toggle(&Domain::VEHICLES, "car-42");
/// assert!(!store.is_liked(&Domain::VEHICLES, "car-42"));
/// ```
pub struct ToggleSetStore {
    sets: HashMap<Domain, LikeSet>,
    watchers: WatchRegistry,
}

impl ToggleSetStore {
    /// Create a store with every domain empty.
    pub fn new() -> Self {
        ToggleSetStore {
            sets: HashMap::new(),
            watchers: WatchRegistry::new(),
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Returns true if `id` is currently liked within `domain`.
    ///
    /// Total and side-effect free; a domain nothing was ever toggled in has
    /// nothing liked. `id` is any value convertible to [`EntityKey`] (string
    /// or number; numbers normalize to their decimal rendering).
    pub fn is_liked(&self, domain: &Domain, id: impl Into<EntityKey>) -> bool {
        let key = id.into();
        self.sets
            .get(domain)
            .is_some_and(|set| set.contains(key.as_str()))
    }

    /// The current snapshot for `domain` (empty for an untouched domain).
    ///
    /// Render paths that probe many keys can take one snapshot and call
    /// [`LikeSet::contains`] with plain `&str`s, skipping key normalization.
    pub fn snapshot(&self, domain: &Domain) -> LikeSet {
        self.sets.get(domain).cloned().unwrap_or_default()
    }

    /// Number of keys currently liked within `domain`.
    pub fn liked_count(&self, domain: &Domain) -> usize {
        self.sets.get(domain).map_or(0, LikeSet::len)
    }

    /// Iterate over the domains that have been toggled in at some point
    /// this session (arbitrary order).
    pub fn domains(&self) -> impl Iterator<Item = &Domain> {
        self.sets.keys()
    }

    // =========================================================================
    // TOGGLE
    // =========================================================================

    /// Flip `id`'s membership in `domain` and return the new snapshot.
    ///
    /// Absent keys are added, present keys are removed; toggling twice in a
    /// row restores the original membership. The domain is auto-created on
    /// first touch. Watchers are notified after the new snapshot is
    /// installed, so a watcher reading the event's set sees post-flip state.
    pub fn toggle(&mut self, domain: &Domain, id: impl Into<EntityKey>) -> LikeSet {
        let key = id.into();
        let current = self.sets.get(domain).cloned().unwrap_or_default();
        let (next, liked) = current.with_toggled(key.clone());
        self.sets.insert(domain.clone(), next.clone());

        self.watchers.notify(&ToggleEvent {
            domain: domain.clone(),
            key,
            liked,
            set: next.clone(),
        });

        next
    }

    // =========================================================================
    // SESSION TEARDOWN
    // =========================================================================

    /// Empty `domain`, notifying watchers of each key that was dropped.
    ///
    /// Events are delivered in arbitrary order, each carrying the emptied
    /// snapshot with `liked == false`.
    pub fn reset_domain(&mut self, domain: &Domain) {
        let Some(previous) = self.sets.remove(domain) else {
            return;
        };

        let emptied = LikeSet::empty();
        for key in previous.iter() {
            self.watchers.notify(&ToggleEvent {
                domain: domain.clone(),
                key: key.clone(),
                liked: false,
                set: emptied.clone(),
            });
        }
    }

    /// Empty every domain, as on session teardown.
    pub fn reset(&mut self) {
        let domains: Vec<Domain> = self.sets.keys().cloned().collect();
        for domain in &domains {
            self.reset_domain(domain);
        }
    }

    // =========================================================================
    // WATCHERS
    // =========================================================================

    /// Register a watcher invoked on every membership flip, in any domain.
    ///
    /// The watcher stays attached until the returned [`Subscription`] is
    /// dropped.
    pub fn watch(&self, callback: impl Fn(&ToggleEvent) + 'static) -> Subscription {
        self.watchers.register(None, callback)
    }

    /// Register a watcher invoked only for flips within `domain`.
    pub fn watch_domain(
        &self,
        domain: Domain,
        callback: impl Fn(&ToggleEvent) + 'static,
    ) -> Subscription {
        self.watchers.register(Some(domain), callback)
    }
}

impl Default for ToggleSetStore {
    fn default() -> Self {
        ToggleSetStore::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn untouched_domain_has_nothing_liked() {
        let store = ToggleSetStore::new();
        assert!(!store.is_liked(&Domain::VEHICLES, "car-42"));
        assert!(!store.is_liked(&Domain::new("never-seen"), "anything"));
        assert_eq!(store.liked_count(&Domain::VEHICLES), 0);
        assert!(store.snapshot(&Domain::VEHICLES).is_empty());
    }

    #[test]
    fn toggle_auto_creates_the_domain() {
        let mut store = ToggleSetStore::new();
        assert_eq!(store.domains().count(), 0);

        store.toggle(&Domain::new("restaurants"), "r-1");

        let domains: Vec<&Domain> = store.domains().collect();
        assert_eq!(domains, vec![&Domain::new("restaurants")]);
        assert!(store.is_liked(&Domain::new("restaurants"), "r-1"));
    }

    #[test]
    fn toggle_returns_the_installed_snapshot() {
        let mut store = ToggleSetStore::new();

        let after_like = store.toggle(&Domain::VEHICLES, "car-42");
        assert!(after_like.contains("car-42"));
        assert_eq!(after_like, store.snapshot(&Domain::VEHICLES));

        let after_unlike = store.toggle(&Domain::VEHICLES, "car-42");
        assert!(!after_unlike.contains("car-42"));
        assert!(after_unlike.is_empty());
    }

    #[test]
    fn same_key_in_two_domains_stays_independent() {
        let mut store = ToggleSetStore::new();

        store.toggle(&Domain::VEHICLES, "shared-id");
        assert!(store.is_liked(&Domain::VEHICLES, "shared-id"));
        assert!(!store.is_liked(&Domain::SERVICES, "shared-id"));

        store.toggle(&Domain::SERVICES, "shared-id");
        store.toggle(&Domain::VEHICLES, "shared-id");
        assert!(!store.is_liked(&Domain::VEHICLES, "shared-id"));
        assert!(store.is_liked(&Domain::SERVICES, "shared-id"));
    }

    #[test]
    fn numeric_and_string_ids_are_the_same_key() {
        let mut store = ToggleSetStore::new();

        store.toggle(&Domain::VEHICLES, 42u64);
        assert!(store.is_liked(&Domain::VEHICLES, "42"));

        store.toggle(&Domain::VEHICLES, "42");
        assert!(!store.is_liked(&Domain::VEHICLES, 42u64));
    }

    #[test]
    fn reset_domain_empties_only_that_domain() {
        let mut store = ToggleSetStore::new();
        store.toggle(&Domain::VEHICLES, "a");
        store.toggle(&Domain::VEHICLES, "b");
        store.toggle(&Domain::SERVICES, "a");

        store.reset_domain(&Domain::VEHICLES);

        assert_eq!(store.liked_count(&Domain::VEHICLES), 0);
        assert!(store.is_liked(&Domain::SERVICES, "a"));
    }

    #[test]
    fn reset_notifies_one_unlike_per_dropped_key() {
        let mut store = ToggleSetStore::new();
        store.toggle(&Domain::VEHICLES, "a");
        store.toggle(&Domain::VEHICLES, "b");
        store.toggle(&Domain::SERVICES, "c");

        let dropped: Rc<RefCell<Vec<(Domain, String, bool)>>> = Rc::new(RefCell::new(Vec::new()));
        let dropped_clone = dropped.clone();
        let _sub = store.watch(move |ev| {
            assert!(ev.set.is_empty());
            dropped_clone
                .borrow_mut()
                .push((ev.domain.clone(), ev.key.to_string(), ev.liked));
        });

        store.reset();

        let mut events = dropped.borrow_mut();
        events.sort();
        assert_eq!(
            *events,
            vec![
                (Domain::SERVICES, "c".to_string(), false),
                (Domain::VEHICLES, "a".to_string(), false),
                (Domain::VEHICLES, "b".to_string(), false),
            ]
        );
    }

    #[test]
    fn reset_of_untouched_domain_is_a_no_op() {
        let mut store = ToggleSetStore::new();
        let fired = Rc::new(Cell::new(false));
        let fired_clone = fired.clone();
        let _sub = store.watch(move |_| fired_clone.set(true));

        store.reset_domain(&Domain::DISCOVER_ITEMS);

        assert!(!fired.get());
    }

    #[test]
    fn domain_watcher_ignores_other_domains() {
        let mut store = ToggleSetStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();

        let _sub = store.watch_domain(Domain::VEHICLES, move |ev| {
            seen_clone.borrow_mut().push((ev.key.to_string(), ev.liked));
        });

        store.toggle(&Domain::VEHICLES, "car-42");
        store.toggle(&Domain::SERVICES, "svc-1");
        store.toggle(&Domain::VEHICLES, "car-42");

        assert_eq!(
            *seen.borrow(),
            vec![("car-42".to_string(), true), ("car-42".to_string(), false)]
        );
    }

    #[test]
    fn watcher_sees_post_flip_snapshot() {
        let mut store = ToggleSetStore::new();
        let _sub = store.watch(|ev| {
            assert_eq!(ev.set.contains(ev.key.as_str()), ev.liked);
        });

        store.toggle(&Domain::VEHICLES, "car-42");
        store.toggle(&Domain::VEHICLES, "car-42");
    }
}
