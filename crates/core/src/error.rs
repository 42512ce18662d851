use alloy::{
    primitives::B256,
    providers::PendingTransactionError,
    transports::TransportError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Form text that cannot be turned into `placeOrder` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("tick amount {input:?} is not a whole number")]
    InvalidTick { input: String },

    #[error("tick {tick} does not fit in int24")]
    TickOutOfRange { tick: i64 },

    #[error("token amount {input:?} is not a valid amount: {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("token amount cannot be negative")]
    NegativeAmount,

    #[error("unknown token {symbol:?}")]
    UnknownToken { symbol: String },
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("calldata is not a placeOrder call: {0}")]
    Decode(#[from] alloy::sol_types::Error),
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to send transaction: {0}")]
    Transport(#[from] TransportError),

    #[error("pending transaction error: {0}")]
    Pending(#[from] PendingTransactionError),

    #[error("transaction receipt missing body")]
    MissingReceipt,

    #[error("submission returned no transaction receipts")]
    NoReceipts,

    #[error("transaction reverted: {tx_hash:?}")]
    Reverted { tx_hash: B256 },

    #[error("submission rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),

    #[error("notification channel closed")]
    Closed,
}
