//! Data models for memopad.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A note document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned by the storage layer at creation.
    pub id: Uuid,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Last-modified time (UTC). Server-assigned on create and on every
    /// update, never taken from client input.
    pub timestamp: DateTime<Utc>,
}
