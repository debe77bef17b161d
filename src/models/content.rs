//! Content item and group models.

use serde::{Deserialize, Serialize};

/// A content item owned by exactly one member at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,

    /// Username of the owning member.
    pub owner: String,

    /// Free-form tags. Order-insensitive; the transfer logic, not the
    /// portal, is responsible for avoiding duplicates.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A group owned by exactly one member. Same tag semantics as [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub title: String,
    pub owner: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
