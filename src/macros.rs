// ============================================================================
// togglesets - Ergonomic Macros
// ============================================================================

/// Build a [`LikeSet`](crate::LikeSet) from a list of ids.
///
/// Handy in tests and demos for comparing against a store snapshot without
/// spelling out the key conversions. Ids may be any mix of values convertible
/// to [`EntityKey`](crate::EntityKey).
///
/// # Usage
///
/// ```
/// use togglesets::{like_set, Domain, ToggleSetStore};
///
/// let mut store = ToggleSetStore::new();
/// store.toggle(&Domain::VEHICLES, "car-42");
/// store.toggle(&Domain::VEHICLES, 7u32);
///
/// assert_eq!(store.snapshot(&Domain::VEHICLES), like_set!["car-42", "7"]);
/// assert_eq!(like_set![], togglesets::LikeSet::empty());
/// ```
#[macro_export]
macro_rules! like_set {
    () => {
        $crate::LikeSet::empty()
    };
    ($($id:expr),+ $(,)?) => {
        ::core::iter::IntoIterator::into_iter([$($crate::EntityKey::from($id)),+])
            .collect::<$crate::LikeSet>()
    };
}
