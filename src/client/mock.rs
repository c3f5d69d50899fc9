//! Mock platform API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::api::{InvitationApi, NotificationApi, TeamApi};
use super::models::{
    AvailableMember, CreateTeamRequest, Invitation, InvitationStatus, NotificationBatches, Team,
};
use crate::error::{ApiError, Result};

type Script = Arc<Mutex<VecDeque<std::result::Result<(), ApiError>>>>;

/// Pop the next scripted outcome for an endpoint; an exhausted script
/// means the call succeeds.
fn next_outcome(script: &Script) -> std::result::Result<(), ApiError> {
    script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(Ok(()))
}

/// Mock API client for testing.
///
/// Configure fixtures and scripted failures via builder methods, then drive
/// the workflows against it. Each endpoint keeps a call count and captures
/// the requests it receives for assertions.
pub struct MockPlatformClient {
    pending_invitations: Arc<Mutex<Vec<Invitation>>>,
    members: Arc<Mutex<Vec<AvailableMember>>>,
    notifications: Arc<Mutex<NotificationBatches>>,
    teams_joined: Arc<Mutex<usize>>,

    create_team_script: Script,
    add_member_script: Script,
    update_invitation_script: Script,
    list_invitations_script: Script,
    mark_read_script: Script,
    teams_joined_script: Script,

    call_counts: Arc<Mutex<CallCounts>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockPlatformClient {
    fn default() -> Self {
        Self {
            pending_invitations: Arc::new(Mutex::new(Vec::new())),
            members: Arc::new(Mutex::new(Vec::new())),
            notifications: Arc::new(Mutex::new(NotificationBatches::default())),
            teams_joined: Arc::new(Mutex::new(0)),
            create_team_script: Arc::new(Mutex::new(VecDeque::new())),
            add_member_script: Arc::new(Mutex::new(VecDeque::new())),
            update_invitation_script: Arc::new(Mutex::new(VecDeque::new())),
            list_invitations_script: Arc::new(Mutex::new(VecDeque::new())),
            mark_read_script: Arc::new(Mutex::new(VecDeque::new())),
            teams_joined_script: Arc::new(Mutex::new(VecDeque::new())),
            call_counts: Arc::new(Mutex::new(CallCounts::default())),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub create_team: usize,
    pub add_team_member: usize,
    pub list_available_members: usize,
    pub teams_joined: usize,
    pub list_pending_invitations: usize,
    pub update_invitation_status: usize,
    pub list_notifications: usize,
    pub mark_notification_read: usize,
}

impl CallCounts {
    /// Total number of API calls made.
    pub fn total(&self) -> usize {
        self.create_team
            + self.add_team_member
            + self.list_available_members
            + self.teams_joined
            + self.list_pending_invitations
            + self.update_invitation_status
            + self.list_notifications
            + self.mark_notification_read
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub enum CapturedRequest {
    CreateTeam(CreateTeamRequest),
    AddMember {
        team_id: String,
        member_id: String,
    },
    UpdateInvitation {
        invitation_id: String,
        status: InvitationStatus,
        teams_joined: usize,
    },
    ListInvitations {
        user_id: String,
    },
    TeamsJoined {
        user_id: String,
    },
    ListMembers,
    ListNotifications {
        user_id: String,
    },
    MarkRead {
        notification_id: String,
    },
}

impl MockPlatformClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pending_invitations(self, invitations: Vec<Invitation>) -> Self {
        *self.pending_invitations.lock().unwrap() = invitations;
        self
    }

    pub fn with_members(self, members: Vec<AvailableMember>) -> Self {
        *self.members.lock().unwrap() = members;
        self
    }

    pub fn with_notifications(self, batches: NotificationBatches) -> Self {
        *self.notifications.lock().unwrap() = batches;
        self
    }

    pub fn with_teams_joined(self, count: usize) -> Self {
        *self.teams_joined.lock().unwrap() = count;
        self
    }

    /// Script outcomes for `create_team`; exhausted scripts succeed.
    pub fn script_create_team(
        self,
        outcomes: Vec<std::result::Result<(), ApiError>>,
    ) -> Self {
        *self.create_team_script.lock().unwrap() = outcomes.into();
        self
    }

    /// Script outcomes for `add_team_member`.
    pub fn script_add_member(self, outcomes: Vec<std::result::Result<(), ApiError>>) -> Self {
        *self.add_member_script.lock().unwrap() = outcomes.into();
        self
    }

    /// Script outcomes for `update_invitation_status`, consumed in call
    /// order (lets a test fail only the rollback, for instance).
    pub fn script_update_invitation(
        self,
        outcomes: Vec<std::result::Result<(), ApiError>>,
    ) -> Self {
        *self.update_invitation_script.lock().unwrap() = outcomes.into();
        self
    }

    /// Script outcomes for `list_pending_invitations`.
    pub fn script_list_invitations(
        self,
        outcomes: Vec<std::result::Result<(), ApiError>>,
    ) -> Self {
        *self.list_invitations_script.lock().unwrap() = outcomes.into();
        self
    }

    /// Script outcomes for `mark_notification_read`.
    pub fn script_mark_read(self, outcomes: Vec<std::result::Result<(), ApiError>>) -> Self {
        *self.mark_read_script.lock().unwrap() = outcomes.into();
        self
    }

    /// Script outcomes for `teams_joined`.
    pub fn script_teams_joined(self, outcomes: Vec<std::result::Result<(), ApiError>>) -> Self {
        *self.teams_joined_script.lock().unwrap() = outcomes.into();
        self
    }

    /// Snapshot of call counts.
    pub fn call_counts(&self) -> CallCounts {
        self.call_counts.lock().unwrap().clone()
    }

    /// Snapshot of captured requests, in call order.
    pub fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    fn capture(&self, request: CapturedRequest) {
        self.captured.lock().unwrap().push(request);
    }
}

#[async_trait]
impl TeamApi for MockPlatformClient {
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team> {
        self.call_counts.lock().unwrap().create_team += 1;
        self.capture(CapturedRequest::CreateTeam(request.clone()));
        next_outcome(&self.create_team_script)?;

        Ok(Team {
            id: "team-created".to_string(),
            name: request.team_data.name,
            description: request.team_data.description,
            team_head: request.team_data.team_head,
            member_ids: request.team_data.members,
        })
    }

    async fn add_team_member(&self, team_id: &str, member_id: &str) -> Result<()> {
        self.call_counts.lock().unwrap().add_team_member += 1;
        self.capture(CapturedRequest::AddMember {
            team_id: team_id.to_string(),
            member_id: member_id.to_string(),
        });
        next_outcome(&self.add_member_script)?;
        Ok(())
    }

    async fn list_available_members(&self) -> Result<Vec<AvailableMember>> {
        self.call_counts.lock().unwrap().list_available_members += 1;
        self.capture(CapturedRequest::ListMembers);
        Ok(self.members.lock().unwrap().clone())
    }

    async fn teams_joined(&self, user_id: &str) -> Result<usize> {
        self.call_counts.lock().unwrap().teams_joined += 1;
        self.capture(CapturedRequest::TeamsJoined {
            user_id: user_id.to_string(),
        });
        next_outcome(&self.teams_joined_script)?;
        Ok(*self.teams_joined.lock().unwrap())
    }
}

#[async_trait]
impl InvitationApi for MockPlatformClient {
    async fn list_pending_invitations(&self, user_id: &str) -> Result<Vec<Invitation>> {
        self.call_counts.lock().unwrap().list_pending_invitations += 1;
        self.capture(CapturedRequest::ListInvitations {
            user_id: user_id.to_string(),
        });
        next_outcome(&self.list_invitations_script)?;
        Ok(self.pending_invitations.lock().unwrap().clone())
    }

    async fn update_invitation_status(
        &self,
        invitation_id: &str,
        status: InvitationStatus,
        teams_joined: usize,
    ) -> Result<()> {
        self.call_counts.lock().unwrap().update_invitation_status += 1;
        self.capture(CapturedRequest::UpdateInvitation {
            invitation_id: invitation_id.to_string(),
            status,
            teams_joined,
        });
        next_outcome(&self.update_invitation_script)?;
        Ok(())
    }
}

#[async_trait]
impl NotificationApi for MockPlatformClient {
    async fn list_notifications(&self, user_id: &str) -> Result<NotificationBatches> {
        self.call_counts.lock().unwrap().list_notifications += 1;
        self.capture(CapturedRequest::ListNotifications {
            user_id: user_id.to_string(),
        });
        Ok(self.notifications.lock().unwrap().clone())
    }

    async fn mark_notification_read(&self, notification_id: &str) -> Result<()> {
        self.call_counts.lock().unwrap().mark_notification_read += 1;
        self.capture(CapturedRequest::MarkRead {
            notification_id: notification_id.to_string(),
        });
        next_outcome(&self.mark_read_script)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_failures_consumed_in_order() {
        let mock = MockPlatformClient::new().script_add_member(vec![
            Err(ApiError::ServerError("first".to_string())),
            Ok(()),
        ]);

        assert!(mock.add_team_member("t", "m").await.is_err());
        assert!(mock.add_team_member("t", "m").await.is_ok());
        assert_eq!(mock.call_counts().add_team_member, 2);
    }

    #[tokio::test]
    async fn test_create_team_echoes_request() {
        let mock = MockPlatformClient::new();
        let team = mock
            .create_team(CreateTeamRequest {
                team_data: super::super::models::TeamData {
                    name: "Rocket".to_string(),
                    description: "d".to_string(),
                    team_head: "head".to_string(),
                    members: vec!["m1".to_string()],
                },
                teams_joined: 1,
            })
            .await
            .unwrap();

        assert_eq!(team.name, "Rocket");
        assert_eq!(team.member_ids, vec!["m1".to_string()]);
        assert_eq!(mock.call_counts().total(), 1);
    }
}
