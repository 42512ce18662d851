use crate::{
    error::NotificationError,
    services::traits::{AccountProvider, NotificationService},
    types::submission::Notification,
};
use alloy::primitives::Address;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

#[async_trait]
impl NotificationService for NoOpNotifier {
    async fn send(&self, _notification: Notification) -> Result<(), NotificationError> {
        Ok(())
    }
}

/// An account that never changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAccount(pub Option<Address>);

impl AccountProvider for StaticAccount {
    fn account(&self) -> Option<Address> {
        self.0
    }
}
