use alloy::{
    consensus::TxReceipt,
    network::TransactionBuilder,
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;
use hookah_core::{
    CallPayload, SubmissionError, SubmissionResult, TransactionReceipt, TransactionSubmitter,
};
use tracing::{debug, info};

/// Sends each call as its own transaction and waits for confirmation.
pub struct RpcSubmitter {
    provider: DynProvider,
    confirmations: u64,
}

impl RpcSubmitter {
    pub fn new(provider: DynProvider, confirmations: u64) -> Self {
        Self {
            provider,
            confirmations: confirmations.max(1),
        }
    }
}

#[async_trait]
impl TransactionSubmitter for RpcSubmitter {
    async fn submit(&self, calls: &[CallPayload]) -> Result<SubmissionResult, SubmissionError> {
        let mut receipts = Vec::with_capacity(calls.len());

        for call in calls {
            let tx = TransactionRequest::default()
                .with_to(call.to)
                .with_input(call.data.clone())
                .with_value(call.value);

            let pending = self.provider.send_transaction(tx).await?;
            debug!(tx_hash = %pending.tx_hash(), "transaction broadcast");

            let receipt = pending
                .with_required_confirmations(self.confirmations)
                .get_receipt()
                .await?;

            let receipt_body = receipt
                .inner
                .as_receipt()
                .ok_or(SubmissionError::MissingReceipt)?;

            if !receipt_body.status() {
                return Err(SubmissionError::Reverted {
                    tx_hash: receipt.transaction_hash,
                });
            }

            info!(
                tx_hash = %receipt.transaction_hash,
                block = ?receipt.block_number,
                "transaction confirmed"
            );
            receipts.push(TransactionReceipt {
                transaction_hash: receipt.transaction_hash,
                block_number: receipt.block_number,
            });
        }

        Ok(SubmissionResult {
            transaction_receipts: receipts,
        })
    }
}
