//! Invitation accept/reject workflow
//!
//! Drives the `PENDING -> ACCEPTED | REJECTED` transition. Both terminal
//! states are final: the workflow refuses to touch an invitation it already
//! resolved, and keys its in-flight guard by invitation ID so one mutation
//! never blocks a different invitation.
//!
//! Accepting is a two-call sequence against the platform: first the
//! invitation status, then the team roster. The calls are not a server-side
//! transaction, so a roster failure triggers a compensating revert of the
//! status update; if the revert itself fails, the divergence is reported
//! distinctly as a consistency gap.

use std::collections::HashSet;

use log::{debug, warn};

use crate::client::api::InvitationApi;
use crate::client::models::{Invitation, InvitationStatus, TeamRole};
use crate::client::PlatformApi;
use crate::error::{ApiError, Error, PolicyError, Result};
use crate::session::{CapacityTracker, MAX_TEAMS};

/// Automatic retries for the invitation list fetch, the only automatic
/// retry anywhere in the tool.
const LIST_FETCH_RETRIES: usize = 10;

/// Per-session invitation state machine.
#[derive(Debug, Default)]
pub struct InvitationWorkflow {
    /// Invitation IDs with a mutation currently in flight
    in_flight: HashSet<String>,
    /// Invitation IDs this session drove to a terminal state
    resolved: HashSet<String>,
}

impl InvitationWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an update for this invitation is currently in flight.
    pub fn is_in_flight(&self, invitation_id: &str) -> bool {
        self.in_flight.contains(invitation_id)
    }

    /// Fetch the user's pending invitations, retrying on failure.
    pub async fn list_pending(
        &self,
        api: &dyn InvitationApi,
        user_id: &str,
    ) -> Result<Vec<Invitation>> {
        let mut attempt = 0;
        loop {
            match api.list_pending_invitations(user_id).await {
                Ok(invitations) => return Ok(invitations),
                Err(err) if attempt < LIST_FETCH_RETRIES => {
                    attempt += 1;
                    debug!(
                        "Invitation list fetch failed (retry {}/{}): {}",
                        attempt, LIST_FETCH_RETRIES, err
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Accept an invitation: mark it accepted, then add the member to the
    /// team roster. The capacity cache moves only after the roster update
    /// is confirmed.
    ///
    /// Local guards run before any network call, in order: terminal state,
    /// head role, membership cap, per-invitation in-flight.
    pub async fn accept(
        &mut self,
        api: &dyn PlatformApi,
        capacity: &mut CapacityTracker,
        invitation: &Invitation,
        role: TeamRole,
    ) -> Result<()> {
        self.guard_actionable(invitation)?;
        if role == TeamRole::Head {
            return Err(PolicyError::HeadCannotJoin.into());
        }
        if !capacity.can_join_more_teams() {
            return Err(PolicyError::TeamCapReached(MAX_TEAMS).into());
        }
        if !self.in_flight.insert(invitation.id.clone()) {
            return Err(PolicyError::UpdateInFlight(invitation.id.clone()).into());
        }

        let result = run_accept(api, capacity, invitation).await;
        self.in_flight.remove(&invitation.id);

        // A consistency gap leaves the invitation accepted on the server,
        // so it is just as terminal as a clean acceptance.
        match &result {
            Ok(()) | Err(Error::ConsistencyGap { .. }) => {
                self.resolved.insert(invitation.id.clone());
            }
            Err(_) => {}
        }
        result
    }

    /// Reject an invitation: a single status update with no roster or
    /// capacity side effects.
    pub async fn reject(
        &mut self,
        api: &dyn InvitationApi,
        capacity: &CapacityTracker,
        invitation: &Invitation,
    ) -> Result<()> {
        self.guard_actionable(invitation)?;
        if !self.in_flight.insert(invitation.id.clone()) {
            return Err(PolicyError::UpdateInFlight(invitation.id.clone()).into());
        }

        let result = api
            .update_invitation_status(
                &invitation.id,
                InvitationStatus::Rejected,
                capacity.teams_joined(),
            )
            .await;
        self.in_flight.remove(&invitation.id);

        if result.is_ok() {
            self.resolved.insert(invitation.id.clone());
        }
        result
    }

    /// Terminal invitations never re-enter the workflow.
    fn guard_actionable(&self, invitation: &Invitation) -> Result<()> {
        if invitation.status.is_terminal() || self.resolved.contains(&invitation.id) {
            return Err(PolicyError::InvitationResolved(invitation.id.clone()).into());
        }
        Ok(())
    }
}

async fn run_accept(
    api: &dyn PlatformApi,
    capacity: &mut CapacityTracker,
    invitation: &Invitation,
) -> Result<()> {
    let projected = capacity.teams_joined() + 1;

    // Step A: invitation -> ACCEPTED
    api.update_invitation_status(&invitation.id, InvitationStatus::Accepted, projected)
        .await?;

    // Step B: add the member to the roster, compensating on failure
    if let Err(roster_err) = api
        .add_team_member(&invitation.team_id, &invitation.member_id)
        .await
    {
        warn!(
            "Roster update for invitation {} failed, reverting acceptance: {}",
            invitation.id, roster_err
        );
        let rollback = api
            .update_invitation_status(
                &invitation.id,
                InvitationStatus::Pending,
                capacity.teams_joined(),
            )
            .await;

        return Err(match rollback {
            Ok(()) => Error::RosterRolledBack {
                invitation_id: invitation.id.clone(),
                source: into_api_error(roster_err),
            },
            Err(rollback_err) => Error::ConsistencyGap {
                invitation_id: invitation.id.clone(),
                roster: into_api_error(roster_err),
                rollback: into_api_error(rollback_err),
            },
        });
    }

    // Only a confirmed roster update moves the cached count.
    capacity.record_join();
    Ok(())
}

fn into_api_error(err: Error) -> ApiError {
    match err {
        Error::Api(api_err) => api_err,
        other => ApiError::InvalidResponse(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::CapturedRequest;
    use crate::client::MockPlatformClient;

    fn pending_invitation() -> Invitation {
        Invitation {
            id: "inv-1".to_string(),
            team_id: "team-1".to_string(),
            member_id: "user-1".to_string(),
            text: "Join Team Rocket".to_string(),
            status: InvitationStatus::Pending,
        }
    }

    fn tracker_with(joined: usize) -> CapacityTracker {
        let mut tracker = CapacityTracker::new();
        for _ in 0..joined {
            tracker.record_join();
        }
        tracker
    }

    #[tokio::test]
    async fn test_accept_updates_invitation_then_roster() {
        let mock = MockPlatformClient::new();
        let mut workflow = InvitationWorkflow::new();
        let mut capacity = tracker_with(1);

        workflow
            .accept(&mock, &mut capacity, &pending_invitation(), TeamRole::Member)
            .await
            .unwrap();

        assert_eq!(capacity.teams_joined(), 2);
        let captured = mock.captured_requests();
        assert_eq!(captured.len(), 2);
        match &captured[0] {
            CapturedRequest::UpdateInvitation {
                invitation_id,
                status,
                teams_joined,
            } => {
                assert_eq!(invitation_id, "inv-1");
                assert_eq!(*status, InvitationStatus::Accepted);
                assert_eq!(*teams_joined, 2);
            }
            other => panic!("Expected UpdateInvitation first, got {:?}", other),
        }
        match &captured[1] {
            CapturedRequest::AddMember { team_id, member_id } => {
                assert_eq!(team_id, "team-1");
                assert_eq!(member_id, "user-1");
            }
            other => panic!("Expected AddMember second, got {:?}", other),
        }
        assert!(!workflow.is_in_flight("inv-1"));
    }

    #[tokio::test]
    async fn test_accept_as_team_head_makes_no_network_call() {
        let mock = MockPlatformClient::new();
        let mut workflow = InvitationWorkflow::new();
        let mut capacity = tracker_with(0);

        let err = workflow
            .accept(&mock, &mut capacity, &pending_invitation(), TeamRole::Head)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Policy(PolicyError::HeadCannotJoin)));
        assert_eq!(mock.call_counts().total(), 0);
    }

    #[tokio::test]
    async fn test_accept_at_cap_rejects_without_roster_call() {
        let mock = MockPlatformClient::new();
        let mut workflow = InvitationWorkflow::new();
        let mut capacity = tracker_with(MAX_TEAMS);

        let err = workflow
            .accept(&mock, &mut capacity, &pending_invitation(), TeamRole::Member)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Policy(PolicyError::TeamCapReached(MAX_TEAMS))
        ));
        assert_eq!(mock.call_counts().total(), 0);
        assert_eq!(capacity.teams_joined(), MAX_TEAMS);
    }

    #[tokio::test]
    async fn test_roster_failure_rolls_invitation_back() {
        let mock = MockPlatformClient::new()
            .script_add_member(vec![Err(ApiError::ServerError("roster down".to_string()))]);
        let mut workflow = InvitationWorkflow::new();
        let mut capacity = tracker_with(1);

        let err = workflow
            .accept(&mock, &mut capacity, &pending_invitation(), TeamRole::Member)
            .await
            .unwrap_err();

        match err {
            Error::RosterRolledBack {
                invitation_id,
                source,
            } => {
                assert_eq!(invitation_id, "inv-1");
                assert!(source.to_string().contains("roster down"));
            }
            other => panic!("Expected RosterRolledBack, got {:?}", other),
        }

        // Capacity never moved, and the compensating revert went out with
        // the unchanged count.
        assert_eq!(capacity.teams_joined(), 1);
        let captured = mock.captured_requests();
        match &captured[2] {
            CapturedRequest::UpdateInvitation {
                status,
                teams_joined,
                ..
            } => {
                assert_eq!(*status, InvitationStatus::Pending);
                assert_eq!(*teams_joined, 1);
            }
            other => panic!("Expected compensating UpdateInvitation, got {:?}", other),
        }

        // The invitation is pending again, so the workflow may retry it.
        assert!(workflow
            .accept(&mock, &mut capacity, &pending_invitation(), TeamRole::Member)
            .await
            .is_ok());
        assert_eq!(capacity.teams_joined(), 2);
    }

    #[tokio::test]
    async fn test_failed_rollback_reports_consistency_gap() {
        let mock = MockPlatformClient::new()
            .script_add_member(vec![Err(ApiError::ServerError("roster down".to_string()))])
            .script_update_invitation(vec![
                Ok(()),
                Err(ApiError::Network("timeout".to_string())),
            ]);
        let mut workflow = InvitationWorkflow::new();
        let mut capacity = tracker_with(1);

        let err = workflow
            .accept(&mock, &mut capacity, &pending_invitation(), TeamRole::Member)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ConsistencyGap { .. }));
        assert_eq!(capacity.teams_joined(), 1);

        // Server-side the invitation is accepted; the workflow treats it as
        // terminal and refuses re-entry.
        let err = workflow
            .accept(&mock, &mut capacity, &pending_invitation(), TeamRole::Member)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Policy(PolicyError::InvitationResolved(_))
        ));
    }

    #[tokio::test]
    async fn test_terminal_invitation_is_not_actionable() {
        let mock = MockPlatformClient::new();
        let mut workflow = InvitationWorkflow::new();
        let mut capacity = tracker_with(0);

        let mut invitation = pending_invitation();
        invitation.status = InvitationStatus::Accepted;

        let err = workflow
            .accept(&mock, &mut capacity, &invitation, TeamRole::Member)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Policy(PolicyError::InvitationResolved(_))
        ));

        let err = workflow
            .reject(&mock, &capacity, &invitation)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Policy(PolicyError::InvitationResolved(_))
        ));
        assert_eq!(mock.call_counts().total(), 0);
    }

    #[tokio::test]
    async fn test_accepted_invitation_cannot_be_accepted_again() {
        let mock = MockPlatformClient::new();
        let mut workflow = InvitationWorkflow::new();
        let mut capacity = tracker_with(0);

        let invitation = pending_invitation();
        workflow
            .accept(&mock, &mut capacity, &invitation, TeamRole::Member)
            .await
            .unwrap();

        // The caller still holds the stale PENDING copy; the workflow
        // remembers the transition.
        let err = workflow
            .accept(&mock, &mut capacity, &invitation, TeamRole::Member)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Policy(PolicyError::InvitationResolved(_))
        ));
        assert_eq!(capacity.teams_joined(), 1);
    }

    #[tokio::test]
    async fn test_reject_has_no_capacity_side_effects() {
        let mock = MockPlatformClient::new();
        let mut workflow = InvitationWorkflow::new();
        let capacity = tracker_with(2);

        workflow
            .reject(&mock, &capacity, &pending_invitation())
            .await
            .unwrap();

        assert_eq!(capacity.teams_joined(), 2);
        let counts = mock.call_counts();
        assert_eq!(counts.update_invitation_status, 1);
        assert_eq!(counts.add_team_member, 0);

        match &mock.captured_requests()[0] {
            CapturedRequest::UpdateInvitation {
                status,
                teams_joined,
                ..
            } => {
                assert_eq!(*status, InvitationStatus::Rejected);
                assert_eq!(*teams_joined, 2);
            }
            other => panic!("Expected UpdateInvitation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_pending_retries_then_succeeds() {
        let mock = MockPlatformClient::new()
            .with_pending_invitations(vec![pending_invitation()])
            .script_list_invitations(vec![
                Err(ApiError::Network("flaky".to_string())),
                Err(ApiError::Network("flaky".to_string())),
            ]);
        let workflow = InvitationWorkflow::new();

        let invitations = workflow.list_pending(&mock, "user-1").await.unwrap();
        assert_eq!(invitations.len(), 1);
        assert_eq!(mock.call_counts().list_pending_invitations, 3);
    }

    #[tokio::test]
    async fn test_list_pending_gives_up_after_retry_budget() {
        let outcomes = (0..=LIST_FETCH_RETRIES)
            .map(|_| Err(ApiError::Network("down".to_string())))
            .collect();
        let mock = MockPlatformClient::new().script_list_invitations(outcomes);
        let workflow = InvitationWorkflow::new();

        assert!(workflow.list_pending(&mock, "user-1").await.is_err());
        assert_eq!(
            mock.call_counts().list_pending_invitations,
            LIST_FETCH_RETRIES + 1
        );
    }
}
