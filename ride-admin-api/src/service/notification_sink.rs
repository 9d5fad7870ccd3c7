use async_trait::async_trait;

use crate::domain::notification::Notification;

/// Receiver for admin action outcomes (toasts, banners, audit feeds)
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, notification: Notification);
}

/// Sink that only writes to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

#[async_trait]
impl NotificationSink for LogNotificationSink {
    async fn notify(&self, notification: Notification) {
        if notification.is_error() {
            tracing::warn!(message = %notification.message, "Admin action failed");
        } else {
            tracing::info!(message = %notification.message, "Admin action succeeded");
        }
    }
}
