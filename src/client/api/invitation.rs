//! Invitation API trait for listing and status transitions

use async_trait::async_trait;

use crate::client::models::{Invitation, InvitationStatus};
use crate::error::Result;

/// Invitation operations on the platform API
///
/// Status updates are single-shot transitions; the workflow layer is
/// responsible for never re-submitting a terminal invitation.
#[async_trait]
pub trait InvitationApi: Send + Sync {
    /// List pending invitations addressed to the user.
    async fn list_pending_invitations(&self, user_id: &str) -> Result<Vec<Invitation>>;

    /// Update an invitation's status.
    ///
    /// `teams_joined` is the count the server should see after this update
    /// takes effect (unchanged for rejections and rollbacks).
    async fn update_invitation_status(
        &self,
        invitation_id: &str,
        status: InvitationStatus,
        teams_joined: usize,
    ) -> Result<()>;
}
