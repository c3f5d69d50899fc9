//! Invitation wire types

use serde::{Deserialize, Serialize};

/// Invitation lifecycle state.
///
/// `Pending` is the only mutable state; `Accepted` and `Rejected` are
/// terminal and never transition again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl InvitationStatus {
    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, InvitationStatus::Pending)
    }
}

/// A team invitation addressed to a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    /// Invitation ID
    #[serde(rename = "inv_id")]
    pub id: String,

    /// Team the invitee would join
    pub team_id: String,

    /// The invited member
    pub member_id: String,

    /// Human-readable invitation text
    pub text: String,

    /// Current lifecycle state
    pub status: InvitationStatus,
}

/// Body for `PUT /api/invitations/invitation/{id}`.
///
/// The server expects the projected teams-joined count alongside the status
/// so it can enforce the cap authoritatively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInvitationRequest {
    pub status: InvitationStatus,
    pub teams_joined: usize,
}
