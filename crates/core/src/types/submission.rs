use alloy::primitives::B256;

/// Receipt data the submitter reports back for one confirmed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionResult {
    pub transaction_receipts: Vec<TransactionReceipt>,
}

impl SubmissionResult {
    pub fn first_hash(&self) -> Option<B256> {
        self.transaction_receipts
            .first()
            .map(|receipt| receipt.transaction_hash)
    }
}

pub const ORDER_PLACED_TITLE: &str = "Limit Order Placed!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn order_placed(tx_hash: B256) -> Self {
        Self {
            title: ORDER_PLACED_TITLE.to_string(),
            body: format!("Your limit order has been placed successfully. Hash: {tx_hash}"),
        }
    }
}
