// ============================================================================
// togglesets - Type Definitions
// Value types for the like-toggle domain model
// ============================================================================

use std::borrow::{Borrow, Cow};
use std::fmt;

// =============================================================================
// DOMAIN
// =============================================================================

/// A named category partitioning the identifier space for likes.
///
/// Each domain owns an independent membership set: toggling an id in one
/// domain never affects another, even when the same id value appears in both.
/// The three categories the library grew out of are provided as constants;
/// any further domain is created with [`Domain::new`] and springs into
/// existence (empty) the first time it is touched.
///
/// # Example
///
/// ```
/// use togglesets::Domain;
///
/// let builtin = Domain::VEHICLES;
/// let custom = Domain::new("restaurants");
///
/// assert_eq!(builtin.name(), "vehicles");
/// assert_eq!(custom.name(), "restaurants");
/// assert_ne!(builtin, custom);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Domain(Cow<'static, str>);

impl Domain {
    /// Likeable vehicles (cars, rentals).
    pub const VEHICLES: Domain = Domain::from_static("vehicles");

    /// Likeable service offerings.
    pub const SERVICES: Domain = Domain::from_static("services");

    /// Likeable discover-feed items (destinations, promotions).
    pub const DISCOVER_ITEMS: Domain = Domain::from_static("discover_items");

    /// Create a domain from a static name without allocating.
    pub const fn from_static(name: &'static str) -> Self {
        Domain(Cow::Borrowed(name))
    }

    /// Create a domain from any owned or borrowed name.
    pub fn new(name: impl Into<String>) -> Self {
        Domain(Cow::Owned(name.into()))
    }

    /// The domain's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Domain {
    fn from(name: &'static str) -> Self {
        Domain::from_static(name)
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Domain(Cow::Owned(name))
    }
}

// =============================================================================
// ENTITY KEY
// =============================================================================

/// An opaque identifier for a likeable item, unique within its domain.
///
/// The datasets this library fronts are duck-typed: the same entity id may
/// arrive as a string in one screen and as a number in another. Keys are
/// normalized to a single string-backed representation at the API boundary,
/// so the store only ever compares one key type. The consequence is spelled
/// out rather than hidden:
///
/// ```
/// use togglesets::EntityKey;
///
/// assert_eq!(EntityKey::from(42u64), EntityKey::from("42"));
/// assert_ne!(EntityKey::from("042"), EntityKey::from("42"));
/// ```
///
/// Keys are opaque values: the store never validates that a key refers to an
/// entity that exists anywhere else.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(Box<str>);

impl EntityKey {
    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets a HashSet<EntityKey> be probed with a plain &str, no allocation.
// Sound because the derived Eq/Hash delegate to the inner str.
impl Borrow<str> for EntityKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityKey {
    fn from(id: &str) -> Self {
        EntityKey(id.into())
    }
}

impl From<String> for EntityKey {
    fn from(id: String) -> Self {
        EntityKey(id.into_boxed_str())
    }
}

impl From<Cow<'_, str>> for EntityKey {
    fn from(id: Cow<'_, str>) -> Self {
        EntityKey(id.into_owned().into_boxed_str())
    }
}

macro_rules! entity_key_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for EntityKey {
                fn from(id: $t) -> Self {
                    EntityKey(id.to_string().into_boxed_str())
                }
            }
        )+
    };
}

entity_key_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_domains_are_distinct() {
        let all = [Domain::VEHICLES, Domain::SERVICES, Domain::DISCOVER_ITEMS];
        let unique: HashSet<&Domain> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn custom_domain_equals_static_domain_with_same_name() {
        assert_eq!(Domain::new("vehicles"), Domain::VEHICLES);
        assert_eq!(Domain::from("vehicles"), Domain::new(String::from("vehicles")));
    }

    #[test]
    fn numeric_keys_normalize_to_decimal_strings() {
        assert_eq!(EntityKey::from(7i32).as_str(), "7");
        assert_eq!(EntityKey::from(-7i64).as_str(), "-7");
        assert_eq!(EntityKey::from(7u8), EntityKey::from(7u128));
    }

    #[test]
    fn set_lookup_by_borrowed_str() {
        let mut set: HashSet<EntityKey> = HashSet::new();
        set.insert(EntityKey::from("car-42"));

        assert!(set.contains("car-42"));
        assert!(!set.contains("car-43"));
    }
}
