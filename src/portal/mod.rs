//! Portal sharing API boundary.
//!
//! The portal is the only external system this tool talks to. All access
//! goes through the [`PortalApi`] trait so the sweep logic can be driven
//! against an in-memory portal in tests; [`PortalClient`] is the production
//! implementation over the portal's REST endpoints.

mod client;

pub use client::PortalClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Group, Item, Member};

/// Operations the sweep performs against the portal.
///
/// Listing operations page through the portal's result sets to exhaustion;
/// callers always see the complete collection, never a truncated prefix.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Search members, optionally narrowed by a category filter. The filter
    /// is advisory server-side; the selector re-applies it authoritatively.
    async fn search_members(&self, category: &str) -> Result<Vec<Member>>;

    /// Look up a single member by username. Returns `None` when the portal
    /// has no such member; other failures are errors.
    async fn get_member(&self, username: &str) -> Result<Option<Member>>;

    /// All items owned by the given member.
    async fn list_items(&self, username: &str) -> Result<Vec<Item>>;

    /// Replace the tag list on an item. `owner` is the current owner.
    async fn update_item_tags(&self, owner: &str, item_id: &str, tags: &[String]) -> Result<()>;

    /// Reassign an item from `owner` to `new_owner`.
    async fn reassign_item(&self, owner: &str, item_id: &str, new_owner: &str) -> Result<()>;

    /// All groups the member is associated with. Includes groups the member
    /// merely belongs to; ownership filtering happens in the caller.
    async fn list_groups(&self, username: &str) -> Result<Vec<Group>>;

    /// Replace the tag list on a group.
    async fn update_group_tags(&self, group_id: &str, tags: &[String]) -> Result<()>;

    /// Reassign a group to a new owner.
    async fn reassign_group(&self, group_id: &str, new_owner: &str) -> Result<()>;

    /// Delete a member account.
    async fn delete_member(&self, username: &str) -> Result<()>;
}
