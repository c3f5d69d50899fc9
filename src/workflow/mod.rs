//! Coordination workflows over the platform API
//!
//! Each workflow owns the local state for one user-facing flow and drives
//! the external calls it needs, reading and updating the session's capacity
//! tracker where membership is at stake.

pub mod invitations;
pub mod notifications;
pub mod selection;
pub mod team_create;

pub use invitations::InvitationWorkflow;
pub use notifications::NotificationFeed;
pub use selection::MemberSelection;
pub use team_create::{TeamCreationFlow, TeamDraft};
