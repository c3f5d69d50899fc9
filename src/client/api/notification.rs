//! Notification API trait

use async_trait::async_trait;

use crate::client::models::NotificationBatches;
use crate::error::Result;

/// Notification operations on the platform API
#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// Fetch the user's notifications, partitioned into new and old batches.
    async fn list_notifications(&self, user_id: &str) -> Result<NotificationBatches>;

    /// Mark a single notification as read.
    async fn mark_notification_read(&self, notification_id: &str) -> Result<()>;
}
