//! Wire types for the team platform API

mod invitation;
mod member;
mod notification;
mod team;

pub use invitation::{Invitation, InvitationStatus, UpdateInvitationRequest};
pub use member::AvailableMember;
pub use notification::{Notification, NotificationBatches};
pub use team::{AddMemberRequest, CreateTeamRequest, Team, TeamData, TeamRole};
