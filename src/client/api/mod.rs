//! API trait definitions split by responsibility
//!
//! This module organizes the platform API surface into focused sub-traits:
//! - [`TeamApi`] - Team creation and roster operations
//! - [`InvitationApi`] - Invitation listing and status transitions
//! - [`NotificationApi`] - Notification feed and read state
//!
//! The [`PlatformApi`](super::PlatformApi) super-trait combines all three.

mod invitation;
mod notification;
mod team;

pub use invitation::InvitationApi;
pub use notification::NotificationApi;
pub use team::TeamApi;
