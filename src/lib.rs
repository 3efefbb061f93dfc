// ============================================================================
// togglesets - A Toggle-Set Membership Store for Rust
// ============================================================================
//
// Session-scoped like/favorite bookkeeping: named domains of liked entity
// keys, one self-inverse toggle operation, snapshot-replacing updates, and
// synchronous change notification for anything that wants to hear about a
// flip as it happens.
// ============================================================================

pub mod core;
pub mod store;
pub mod watch;

mod macros;

// Re-export the whole surface at the crate root for ergonomic access
pub use crate::core::types::{Domain, EntityKey};
pub use crate::store::{LikeSet, ToggleSetStore};
pub use crate::watch::{Subscription, ToggleEvent};

// =============================================================================
// TESTS
// =============================================================================
