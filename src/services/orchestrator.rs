//! Sweep orchestration.
//!
//! Resolves the holding account first; if it cannot be resolved, the run
//! aborts before any side effect. Members are then processed one at a time:
//! content transfer, group transfer, then deletion when enabled. There is no
//! concurrency between members and no checkpointing; an interrupted run
//! leaves earlier members fully processed and the rest untouched.

use std::fmt;

use tracing::{error, info, warn};

use crate::config::SweepConfig;
use crate::error::{Error, Result};
use crate::portal::PortalApi;
use crate::services::{deleter, selector, transfer};

/// Counts accumulated over one sweep run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub members_selected: usize,
    pub members_processed: usize,
    pub items_transferred: usize,
    pub items_failed: usize,
    pub groups_transferred: usize,
    pub groups_failed: usize,
    pub members_deleted: usize,
    pub deletions_failed: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} members selected, {} processed; items {} transferred / {} failed; \
             groups {} transferred / {} failed; {} deleted / {} delete failures",
            self.members_selected,
            self.members_processed,
            self.items_transferred,
            self.items_failed,
            self.groups_transferred,
            self.groups_failed,
            self.members_deleted,
            self.deletions_failed,
        )
    }
}

/// Run one full sweep.
pub async fn run(api: &dyn PortalApi, config: &SweepConfig) -> Result<RunSummary> {
    let holding = api
        .get_member(&config.holding_account)
        .await?
        .ok_or_else(|| Error::HoldingAccountNotFound(config.holding_account.clone()))?;

    let members = selector::select_members(api, config).await?;

    let mut summary = RunSummary {
        members_selected: members.len(),
        ..RunSummary::default()
    };

    if members.is_empty() {
        info!(
            category = %config.category,
            "No members matched the category and age threshold"
        );
        return Ok(summary);
    }

    for member in &members {
        // The holding account must never be swept into itself.
        if member.username == holding.username {
            warn!(username = %member.username, "Holding account matched selection; skipping");
            continue;
        }

        info!(username = %member.username, "Processing member");

        match transfer::transfer_content(api, member, &holding).await {
            Ok(stats) => {
                summary.items_transferred += stats.transferred;
                summary.items_failed += stats.failed;
            }
            Err(e) => {
                error!(username = %member.username, error = %e, "Content transfer failed");
                summary.items_failed += 1;
            }
        }

        match transfer::transfer_groups(api, member, &holding).await {
            Ok(stats) => {
                summary.groups_transferred += stats.transferred;
                summary.groups_failed += stats.failed;
            }
            Err(e) => {
                error!(username = %member.username, error = %e, "Group transfer failed");
                summary.groups_failed += 1;
            }
        }

        if config.delete_accounts {
            if deleter::delete_member(api, member).await {
                summary.members_deleted += 1;
            } else {
                summary.deletions_failed += 1;
            }
        }

        summary.members_processed += 1;
    }

    Ok(summary)
}
