//! Member account deletion.

use tracing::{error, info};

use crate::models::Member;
use crate::portal::PortalApi;

/// Delete a member account. Returns whether the deletion succeeded; failure
/// is logged and not retried.
pub async fn delete_member(api: &dyn PortalApi, member: &Member) -> bool {
    info!(username = %member.username, "Deleting member");

    match api.delete_member(&member.username).await {
        Ok(()) => {
            info!(username = %member.username, "Member deleted");
            true
        }
        Err(e) => {
            error!(username = %member.username, error = %e, "Failed to delete member");
            false
        }
    }
}
