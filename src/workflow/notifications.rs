//! Notification feed with per-entry read state
//!
//! Read state lives on each `Notification` entity rather than in a parallel
//! array, so entries can be appended or re-ordered without desyncing
//! anything. The derived "has unread" signal feeds the bell indicator.

use crate::client::api::NotificationApi;
use crate::client::models::{Notification, NotificationBatches};
use crate::error::{ApiError, Result};

/// The user's notifications plus the derived unread signal.
pub struct NotificationFeed {
    entries: Vec<Notification>,
    has_unread: bool,
}

impl NotificationFeed {
    /// Build a feed from the initially loaded (old) notifications.
    pub fn new(old: Vec<Notification>) -> Self {
        let mut feed = Self {
            entries: old,
            has_unread: false,
        };
        feed.recompute();
        feed
    }

    /// Build a feed from a server response: the old batch first, the new
    /// batch appended after it.
    pub fn from_batches(batches: NotificationBatches) -> Self {
        let mut feed = Self::new(batches.old);
        feed.append_new(batches.new);
        feed
    }

    /// Append a batch of newly arrived notifications.
    ///
    /// New batches can show up well after the old set loaded; they extend
    /// existing state and never replace it.
    pub fn append_new(&mut self, batch: Vec<Notification>) {
        self.entries.extend(batch);
        self.recompute();
    }

    /// Mark one notification as read, confirmation-first: the server call
    /// goes out before any local state changes, and the flag only flips on
    /// success. Returns whether local state actually changed, so callers
    /// can tell an idempotent repeat from a real transition.
    pub async fn mark_read(
        &mut self,
        api: &dyn NotificationApi,
        notification_id: &str,
    ) -> Result<bool> {
        let index = self
            .entries
            .iter()
            .position(|n| n.id == notification_id)
            .ok_or_else(|| ApiError::NotFound(format!("Notification {}", notification_id)))?;

        api.mark_notification_read(notification_id).await?;

        let entry = &mut self.entries[index];
        if entry.read {
            return Ok(false);
        }
        entry.read = true;
        self.recompute();
        Ok(true)
    }

    /// The shared "unread dot" signal.
    pub fn has_unread(&self) -> bool {
        self.has_unread
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn recompute(&mut self) {
        self.has_unread = self.entries.iter().any(|n| !n.read);
    }
}
