//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{AvailableMember, Invitation, Notification, Team};

/// Invitation display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct InvitationDisplay {
    #[tabled(rename = "INVITATION ID")]
    pub id: String,

    #[tabled(rename = "TEAM ID")]
    pub team_id: String,

    #[tabled(rename = "INVITATION")]
    pub text: String,
}

impl From<&Invitation> for InvitationDisplay {
    fn from(invitation: &Invitation) -> Self {
        Self {
            id: invitation.id.clone(),
            team_id: invitation.team_id.clone(),
            text: invitation.text.clone(),
        }
    }
}

/// Available-member display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,
}

impl From<&AvailableMember> for MemberDisplay {
    fn from(member: &AvailableMember) -> Self {
        Self {
            id: member.id.clone(),
            username: member.username.clone(),
            email: member.email.clone(),
        }
    }
}

/// Notification display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct NotificationDisplay {
    #[tabled(rename = "NOTIFICATION ID")]
    pub id: String,

    #[tabled(rename = "NOTIFICATION")]
    pub text: String,

    #[tabled(rename = "RECEIVED")]
    pub received: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&Notification> for NotificationDisplay {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.clone(),
            text: notification.text.clone(),
            received: notification
                .created_at
                .format("%Y-%m-%d %H:%M UTC")
                .to_string(),
            status: if notification.read {
                "read".to_string()
            } else {
                "unread".to_string()
            },
        }
    }
}

/// Team display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamDisplay {
    #[tabled(rename = "TEAM ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "HEAD")]
    pub team_head: String,

    #[tabled(rename = "MEMBERS")]
    pub members: usize,
}

impl From<&Team> for TeamDisplay {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.clone(),
            name: team.name.clone(),
            team_head: team.team_head.clone(),
            members: team.member_ids.len(),
        }
    }
}
