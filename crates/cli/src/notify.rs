use async_trait::async_trait;
use hookah_core::{Notification, NotificationError, NotificationService};
use tokio::sync::mpsc;
use tracing::info;

/// Writes notifications to the log. Used by the one-shot commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl NotificationService for TracingNotifier {
    async fn send(&self, notification: Notification) -> Result<(), NotificationError> {
        info!(title = %notification.title, "{}", notification.body);
        Ok(())
    }
}

/// Forwards notifications to the interactive UI's toast queue.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NotificationService for ChannelNotifier {
    async fn send(&self, notification: Notification) -> Result<(), NotificationError> {
        self.tx
            .send(notification)
            .map_err(|_| NotificationError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn channel_notifier_forwards_and_reports_closed() {
        let (notifier, mut rx) = ChannelNotifier::new();
        let notification = Notification {
            title: "t".into(),
            body: "b".into(),
        };

        notifier.send(notification.clone()).await.unwrap();
        assert_eq!(rx.recv().await, Some(notification.clone()));

        drop(rx);
        assert!(matches!(
            notifier.send(notification).await,
            Err(NotificationError::Closed)
        ));
    }
}
