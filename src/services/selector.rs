//! Member selection by category and account age.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::config::SweepConfig;
use crate::error::Result;
use crate::models::Member;
use crate::portal::PortalApi;

/// Whether a member qualifies for retirement: the category must be present
/// and the account must have been created strictly before the cutoff.
/// Members without a recorded creation time never qualify.
pub fn is_retirable(member: &Member, category: &str, cutoff: DateTime<Utc>) -> bool {
    if !member.categories.iter().any(|c| c == category) {
        return false;
    }
    match member.created_at() {
        Some(created) => created < cutoff,
        None => false,
    }
}

/// Fetch all members and keep those matching the configured category and
/// age threshold. Order is whatever the portal returned.
pub async fn select_members(api: &dyn PortalApi, config: &SweepConfig) -> Result<Vec<Member>> {
    info!(
        category = %config.category,
        min_age_days = config.min_age_days,
        "Searching for members to retire"
    );

    let cutoff = Utc::now() - Duration::days(config.min_age_days);
    let members = api.search_members(&config.category).await?;
    let total = members.len();

    let matching: Vec<Member> = members
        .into_iter()
        .filter(|m| is_retirable(m, &config.category, cutoff))
        .collect();

    info!(
        examined = total,
        selected = matching.len(),
        "Member selection complete"
    );

    Ok(matching)
}
