// ============================================================================
// togglesets - Store Module
// LikeSet snapshots and the ToggleSetStore that installs them
// ============================================================================
//
// The mutation discipline lives here: a toggle never edits a set in place,
// it builds the next snapshot and swaps it in wholesale. That single rule is
// what makes previously handed-out snapshots safe to keep.
// ============================================================================

pub(crate) mod like_set;
mod toggle_store;

pub use like_set::LikeSet;
pub use toggle_store::ToggleSetStore;
