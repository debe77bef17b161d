//! Item and group transfer with provenance tagging.
//!
//! Each entity is handled independently: the source member's email is
//! appended to the entity's tags (skipped when already present), the tag
//! update is persisted, then ownership moves to the holding account. A
//! failure on one entity is logged and does not abort the rest.

use tracing::{error, info};

use crate::error::Result;
use crate::models::{Group, Item, Member};
use crate::portal::PortalApi;

/// Outcome counts for one member's item or group transfer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferStats {
    pub transferred: usize,
    pub failed: usize,
}

/// The tag list with the source email appended, or `None` when no update is
/// needed (empty email or tag already present). Idempotent by construction.
pub fn provenance_tags(tags: &[String], email: Option<&str>) -> Option<Vec<String>> {
    let email = email.map(str::trim).filter(|e| !e.is_empty())?;
    if tags.iter().any(|t| t == email) {
        return None;
    }
    let mut updated = tags.to_vec();
    updated.push(email.to_string());
    Some(updated)
}

/// Transfer every item owned by `from` to `to`.
pub async fn transfer_content(
    api: &dyn PortalApi,
    from: &Member,
    to: &Member,
) -> Result<TransferStats> {
    info!(from = %from.username, to = %to.username, "Transferring content");

    let items = api.list_items(&from.username).await?;
    let mut stats = TransferStats::default();

    for item in &items {
        match transfer_item(api, from, to, item).await {
            Ok(()) => {
                info!(title = %item.title, "Transferred item");
                stats.transferred += 1;
            }
            Err(e) => {
                error!(title = %item.title, error = %e, "Failed to transfer item");
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}

async fn transfer_item(
    api: &dyn PortalApi,
    from: &Member,
    to: &Member,
    item: &Item,
) -> Result<()> {
    if let Some(tags) = provenance_tags(&item.tags, from.email_tag()) {
        api.update_item_tags(&from.username, &item.id, &tags).await?;
    }
    api.reassign_item(&from.username, &item.id, &to.username)
        .await
}

/// Transfer every group *owned* by `from` to `to`. Groups the member merely
/// belongs to are left untouched.
pub async fn transfer_groups(
    api: &dyn PortalApi,
    from: &Member,
    to: &Member,
) -> Result<TransferStats> {
    info!(from = %from.username, to = %to.username, "Transferring groups");

    let groups = api.list_groups(&from.username).await?;
    let mut stats = TransferStats::default();

    for group in groups.iter().filter(|g| g.owner == from.username) {
        match transfer_group(api, from, to, group).await {
            Ok(()) => {
                info!(title = %group.title, "Transferred group");
                stats.transferred += 1;
            }
            Err(e) => {
                error!(title = %group.title, error = %e, "Failed to transfer group");
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}

async fn transfer_group(
    api: &dyn PortalApi,
    from: &Member,
    to: &Member,
    group: &Group,
) -> Result<()> {
    if let Some(tags) = provenance_tags(&group.tags, from.email_tag()) {
        api.update_group_tags(&group.id, &tags).await?;
    }
    api.reassign_group(&group.id, &to.username).await
}
