//! Per-invocation session state
//!
//! The session owns every piece of cross-workflow mutable state, most
//! importantly the teams-joined capacity cache. It is created after config
//! load, passed by reference to the workflows that need it, and dropped when
//! the command finishes. Nothing here is process-global.

pub mod capacity;

pub use capacity::{CapacityTracker, MAX_TEAMS};

use crate::client::api::TeamApi;
use crate::client::models::TeamRole;

/// The signed-in user, as recorded at `teamctl init`.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub role: TeamRole,
}

/// State for one signed-in command invocation.
pub struct Session {
    pub user: SessionUser,
    pub capacity: CapacityTracker,
}

impl Session {
    /// Start a session: capture the identity and prime the capacity cache
    /// from the platform. A failed refresh is tolerated: the tracker keeps
    /// its prior value and the command proceeds on stale data.
    pub async fn start(user: SessionUser, api: &dyn TeamApi) -> Self {
        let mut capacity = CapacityTracker::new();
        capacity.refresh(api, &user.id).await;
        Session { user, capacity }
    }
}
