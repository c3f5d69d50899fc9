//! Team creation flow
//!
//! Validates the draft, applies the two independent gates (membership cap
//! and head eligibility), and submits to the platform. On failure the draft
//! and member selection are preserved so the user can retry.

use crate::client::api::TeamApi;
use crate::client::models::{CreateTeamRequest, Team, TeamData, TeamRole};
use crate::error::{PolicyError, Result};
use crate::session::{Session, MAX_TEAMS};
use crate::workflow::selection::MemberSelection;

/// The editable team fields. The head is not part of the draft; it is
/// fixed to the session user and cannot be changed in the form.
#[derive(Debug, Clone, Default)]
pub struct TeamDraft {
    pub name: String,
    pub description: String,
}

/// One team-creation form session.
#[derive(Debug, Default)]
pub struct TeamCreationFlow {
    draft: TeamDraft,
    selection: MemberSelection,
}

impl TeamCreationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TeamDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TeamDraft {
        &mut self.draft
    }

    pub fn selection(&self) -> &MemberSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut MemberSelection {
        &mut self.selection
    }

    /// Submit the draft.
    ///
    /// Validation and both gates run locally before any network call. On
    /// success the form resets, the selection clears, and the capacity
    /// cache records the join; on failure everything is preserved for a
    /// retry.
    pub async fn submit(&mut self, api: &dyn TeamApi, session: &mut Session) -> Result<Team> {
        if self.draft.name.trim().is_empty() {
            return Err(PolicyError::EmptyTeamName.into());
        }
        if self.draft.description.trim().is_empty() {
            return Err(PolicyError::EmptyTeamDescription.into());
        }

        // Two independent gates; both must pass.
        if session.user.role == TeamRole::Head {
            return Err(PolicyError::CannotHeadTeam.into());
        }
        if !session.capacity.can_join_more_teams() {
            return Err(PolicyError::TeamCapReached(MAX_TEAMS).into());
        }

        let request = CreateTeamRequest {
            team_data: TeamData {
                name: self.draft.name.trim().to_string(),
                description: self.draft.description.trim().to_string(),
                team_head: session.user.id.clone(),
                members: self.selection.members(),
            },
            teams_joined: session.capacity.teams_joined() + 1,
        };

        let team = api.create_team(request).await?;

        self.draft = TeamDraft::default();
        self.selection.clear();
        session.capacity.record_join();
        Ok(team)
    }
}
