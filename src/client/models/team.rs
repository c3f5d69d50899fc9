//! Team wire types

use serde::{Deserialize, Serialize};

/// The role the signed-in user holds with respect to teams.
///
/// A head of a team cannot also join other teams as a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TeamRole {
    #[serde(rename = "TEAM_HEAD")]
    Head,

    #[default]
    #[serde(rename = "TEAM_MEMBER")]
    Member,
}

/// A team as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: String,

    /// Team name
    pub name: String,

    /// Team description
    pub description: String,

    /// User ID of the fixed team head
    pub team_head: String,

    /// Member user IDs
    #[serde(default)]
    pub member_ids: Vec<String>,
}

/// The team fields submitted by the creation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamData {
    pub name: String,
    pub description: String,
    pub team_head: String,
    pub members: Vec<String>,
}

/// Body for `POST /api/teams`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    #[serde(rename = "teamData")]
    pub team_data: TeamData,

    /// Projected count after this creation succeeds, for server-side cap
    /// enforcement.
    pub teams_joined: usize,
}

/// Body for `POST /api/teams/team/{teamId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberRequest {
    pub member_id: String,
}
