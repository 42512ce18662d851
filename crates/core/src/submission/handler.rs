use std::sync::Arc;

use alloy::primitives::B256;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::{
    error::SubmissionError,
    services::traits::NotificationService,
    types::submission::{Notification, SubmissionResult},
};

/// Reacts to the submitter's two callbacks.
#[derive(Clone)]
pub struct SubmissionHandler {
    notifier: Arc<dyn NotificationService>,
}

/// A successful submission whose notification has been handed off.
#[derive(Debug)]
pub struct Dispatched {
    pub tx_hash: B256,
    pub notification: NotificationHandle,
}

/// Detached notification task. Nothing waits on it; dropping the handle does
/// not cancel delivery, and delivery is never guaranteed to complete.
#[derive(Debug)]
pub struct NotificationHandle(Option<JoinHandle<()>>);

impl NotificationHandle {
    /// Waits for the delivery attempt to finish, whatever its result.
    pub async fn settled(self) {
        if let Some(task) = self.0 {
            let _ = task.await;
        }
    }

    pub fn is_detached(&self) -> bool {
        self.0.is_some()
    }
}

impl SubmissionHandler {
    pub fn new(notifier: Arc<dyn NotificationService>) -> Self {
        Self { notifier }
    }

    pub fn handle_success(&self, result: &SubmissionResult) -> Result<Dispatched, SubmissionError> {
        let tx_hash = result.first_hash().ok_or(SubmissionError::NoReceipts)?;
        info!(%tx_hash, "limit order placed successfully");

        let notification = self.dispatch(Notification::order_placed(tx_hash));
        Ok(Dispatched {
            tx_hash,
            notification,
        })
    }

    pub fn handle_error(&self, error: &SubmissionError) {
        error!("Limit order failed: {error}");
    }

    fn dispatch(&self, notification: Notification) -> NotificationHandle {
        let Ok(runtime) = Handle::try_current() else {
            warn!("no async runtime, dropping notification");
            return NotificationHandle(None);
        };

        let notifier = Arc::clone(&self.notifier);
        let task = runtime.spawn(async move {
            if let Err(error) = notifier.send(notification).await {
                debug!(%error, "notification not delivered");
            }
        });
        NotificationHandle(Some(task))
    }
}
