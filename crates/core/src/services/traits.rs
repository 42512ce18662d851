use alloy::primitives::Address;
use async_trait::async_trait;

use crate::{
    error::{NotificationError, SubmissionError},
    types::{
        payload::CallPayload,
        submission::{Notification, SubmissionResult},
    },
};

/// Source of the connected wallet account, if any.
pub trait AccountProvider: Send + Sync {
    fn account(&self) -> Option<Address>;
}

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send(&self, notification: Notification) -> Result<(), NotificationError>;
}

/// Signs, broadcasts and confirms a call list.
///
/// Each attempt resolves to exactly one outcome. An attempt the user abandons
/// may never resolve.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn submit(&self, calls: &[CallPayload]) -> Result<SubmissionResult, SubmissionError>;
}
