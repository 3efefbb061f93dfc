// ============================================================================
// togglesets - Watch Layer
// Synchronous change notification for membership flips
// ============================================================================
//
// Presentation collaborators re-render liked state by querying the store on
// each pass; the watch layer exists for everything else (badge counters,
// write-through persistence adapters) that wants to hear about a flip the
// moment it happens. Callbacks run synchronously at the end of `toggle`,
// after the new snapshot is installed, in registration order.
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::types::{Domain, EntityKey};
use crate::store::like_set::LikeSet;

// =============================================================================
// TOGGLE EVENT
// =============================================================================

/// One membership flip, as seen by watchers.
///
/// `set` is the snapshot installed by the flip, so a watcher that inspects it
/// observes post-flip state; `liked` is `key`'s membership in that snapshot.
#[derive(Clone, Debug)]
pub struct ToggleEvent {
    /// The domain the flip happened in.
    pub domain: Domain,
    /// The key whose membership flipped.
    pub key: EntityKey,
    /// True if the key is liked after the flip.
    pub liked: bool,
    /// The domain's snapshot after the flip.
    pub set: LikeSet,
}

type WatchFn = Rc<dyn Fn(&ToggleEvent)>;

struct WatchEntry {
    key: u64,
    /// None watches every domain.
    filter: Option<Domain>,
    callback: WatchFn,
}

// =============================================================================
// REGISTRY
// =============================================================================

struct RegistryInner {
    next_key: u64,
    entries: Vec<WatchEntry>,
}

/// The store-owned list of registered watchers.
pub(crate) struct WatchRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl WatchRegistry {
    pub(crate) fn new() -> Self {
        WatchRegistry {
            inner: Rc::new(RefCell::new(RegistryInner {
                next_key: 0,
                entries: Vec::new(),
            })),
        }
    }

    pub(crate) fn register(
        &self,
        filter: Option<Domain>,
        callback: impl Fn(&ToggleEvent) + 'static,
    ) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let key = inner.next_key;
        inner.next_key += 1;
        inner.entries.push(WatchEntry {
            key,
            filter,
            callback: Rc::new(callback),
        });

        Subscription {
            registry: Rc::downgrade(&self.inner),
            key,
        }
    }

    /// Deliver `event` to every watcher whose filter matches its domain.
    ///
    /// The matching callbacks are collected under a short borrow and invoked
    /// with the registry released, so a callback may drop its own
    /// `Subscription` (taking effect from the next flip) without tripping a
    /// re-entrant borrow.
    pub(crate) fn notify(&self, event: &ToggleEvent) {
        let matching: Vec<WatchFn> = {
            let inner = self.inner.borrow();
            inner
                .entries
                .iter()
                .filter(|entry| {
                    entry
                        .filter
                        .as_ref()
                        .is_none_or(|domain| *domain == event.domain)
                })
                .map(|entry| entry.callback.clone())
                .collect()
        };

        for callback in matching {
            callback(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Handle to a registered watcher.
///
/// Dropping the subscription (or calling [`unsubscribe`](Self::unsubscribe))
/// detaches the callback; later toggles no longer invoke it. Outliving the
/// store is harmless, the detach just becomes a no-op.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use togglesets::{Domain, ToggleSetStore};
///
/// let mut store = ToggleSetStore::new();
/// let flips = Rc::new(Cell::new(0));
///
/// let sub = store.watch({
///     let flips = flips.clone();
///     move |_event| flips.set(flips.get() + 1)
/// });
///
/// store.toggle(&Domain::VEHICLES, "car-42");
/// assert_eq!(flips.get(), 1);
///
/// drop(sub);
/// store.toggle(&Domain::VEHICLES, "car-42");
/// assert_eq!(flips.get(), 1);
/// ```
#[must_use = "dropping a Subscription detaches its watcher"]
pub struct Subscription {
    registry: Weak<RefCell<RegistryInner>>,
    key: u64,
}

impl Subscription {
    /// Detach the watcher now. Equivalent to dropping the subscription.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.borrow_mut().entries.retain(|entry| entry.key != self.key);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
