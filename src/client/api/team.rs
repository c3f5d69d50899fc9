//! Team API trait for creation and roster operations

use async_trait::async_trait;

use crate::client::models::{AvailableMember, CreateTeamRequest, Team};
use crate::error::Result;

/// Team operations on the platform API
#[async_trait]
pub trait TeamApi: Send + Sync {
    /// Create a new team.
    ///
    /// The request carries the projected teams-joined count so the server
    /// can enforce the membership cap authoritatively; the local tracker is
    /// only a UX gate.
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team>;

    /// Add a member to an existing team's roster.
    async fn add_team_member(&self, team_id: &str, member_id: &str) -> Result<()>;

    /// List members currently open to joining a team.
    async fn list_available_members(&self) -> Result<Vec<AvailableMember>>;

    /// Fetch the authoritative number of teams the user belongs to,
    /// counting head and member roles alike.
    async fn teams_joined(&self, user_id: &str) -> Result<usize>;
}
