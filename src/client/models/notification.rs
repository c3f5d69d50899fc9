//! Notification wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-facing notification.
///
/// `read` only ever transitions `false -> true`, and only after the server
/// confirms the mark-read call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Notification ID
    #[serde(rename = "notf_id")]
    pub id: String,

    /// Notification text
    pub text: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Whether the user has read this notification
    pub read: bool,
}

/// Notifications partitioned by the server into recent and older entries.
///
/// The `new` batch can arrive after the `old` batch was already consumed;
/// the feed appends it rather than replacing existing state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationBatches {
    #[serde(default)]
    pub new: Vec<Notification>,

    #[serde(default)]
    pub old: Vec<Notification>,
}

impl NotificationBatches {
    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.old.is_empty()
    }
}
