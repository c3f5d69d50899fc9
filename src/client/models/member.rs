//! Member wire types

use serde::{Deserialize, Serialize};

/// A platform user open to joining a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableMember {
    /// User ID
    pub id: String,

    /// Display username
    pub username: String,

    /// Contact email
    pub email: String,
}
