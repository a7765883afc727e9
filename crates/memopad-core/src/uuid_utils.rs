//! UUID v7 utilities for time-ordered identifiers.
//!
//! Note ids are UUIDv7 (RFC 9562): the first 48 bits embed a millisecond
//! Unix timestamp, so ids assigned later sort lexicographically greater
//! and index pages stay append-ordered under insert load.

use uuid::Uuid;

/// Generate a new UUIDv7 identifier.
///
/// # Example
///
/// ```
/// use memopad_core::uuid_utils::new_v7;
///
/// let id = new_v7();
/// assert!(!id.is_nil());
/// ```
#[inline]
pub fn new_v7() -> Uuid {
    Uuid::now_v7()
}

/// Check whether a UUID is version 7.
pub fn is_v7(id: &Uuid) -> bool {
    id.get_version_num() == 7
}
