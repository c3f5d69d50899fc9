//! Teams-joined capacity cache
//!
//! Tracks how many teams the signed-in user currently belongs to (head and
//! member roles combined) and gates every join/create action against the
//! hard cap. The cap here is a UX gate only; the server enforces it
//! authoritatively with the projected count each mutation carries.

use log::warn;

use crate::client::api::TeamApi;

/// Maximum number of teams a user may belong to simultaneously.
pub const MAX_TEAMS: usize = 3;

/// Cache of the user's teams-joined count.
///
/// Updates are confirmation-first: `record_join` must only run after the
/// corresponding server mutation succeeded. There is no decrement; leaving
/// a team has no flow on this platform yet.
#[derive(Debug, Clone, Default)]
pub struct CapacityTracker {
    teams_joined: usize,
}

impl CapacityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached count with the authoritative one.
    ///
    /// On a network failure the stale cached value stays in place rather
    /// than blocking the command. Safe to call at the start of any
    /// capacity-dependent flow.
    pub async fn refresh(&mut self, api: &dyn TeamApi, user_id: &str) {
        match api.teams_joined(user_id).await {
            Ok(count) => self.teams_joined = count,
            Err(err) => warn!(
                "Could not refresh teams-joined count, keeping cached value {}: {}",
                self.teams_joined, err
            ),
        }
    }

    /// Current cached count.
    pub fn teams_joined(&self) -> usize {
        self.teams_joined
    }

    /// Whether the user is below the membership cap.
    pub fn can_join_more_teams(&self) -> bool {
        self.teams_joined < MAX_TEAMS
    }

    /// Record one confirmed join or creation.
    pub fn record_join(&mut self) {
        self.teams_joined += 1;
    }
}
