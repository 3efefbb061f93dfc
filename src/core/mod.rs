// ============================================================================
// togglesets - Core Module
// Value types shared by the store and watch layers
// ============================================================================

pub mod types;

pub use types::{Domain, EntityKey};
