use std::sync::Arc;

use alloy::primitives::B256;
use eyre::{Result, eyre};
use hookah_core::{OrderConfig, OrderForm, TransactionSubmitter};
use tracing::info;

use crate::{notify::TracingNotifier, wallet::WalletSession};

use super::FormInput;

/// Places one order and waits for its notification to settle before
/// returning, so a short-lived process does not drop it.
pub async fn submit(
    config: OrderConfig,
    wallet: Arc<WalletSession>,
    submitter: &dyn TransactionSubmitter,
    input: &FormInput,
) -> Result<B256> {
    let mut form = OrderForm::new(config, wallet, Arc::new(TracingNotifier));
    input.apply(&mut form);
    info!(summary = %form.summary(), "placing limit order");

    let dispatched = form
        .submit(submitter)
        .await
        .into_result()?
        .ok_or_else(|| eyre!("no wallet connected"))?;
    dispatched.notification.settled().await;
    Ok(dispatched.tx_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hookah_core::{CallPayload, SubmissionError, SubmissionResult, TransactionReceipt};
    use std::sync::Mutex;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const HASH: B256 = B256::repeat_byte(0x42);

    #[derive(Default)]
    struct Capture(Mutex<Vec<CallPayload>>);

    #[async_trait]
    impl TransactionSubmitter for Capture {
        async fn submit(
            &self,
            calls: &[CallPayload],
        ) -> Result<SubmissionResult, SubmissionError> {
            self.0.lock().unwrap().extend_from_slice(calls);
            Ok(SubmissionResult {
                transaction_receipts: vec![TransactionReceipt {
                    transaction_hash: HASH,
                    block_number: None,
                }],
            })
        }
    }

    #[tokio::test]
    async fn submits_form_calls_through_submitter() {
        let wallet = Arc::new(WalletSession::from_key(Some(KEY)).unwrap());
        let capture = Capture::default();
        let input = FormInput {
            tick: Some("121".into()),
            amount: Some("1".into()),
            token: None,
        };

        let hash = submit(OrderConfig::default(), wallet, &capture, &input)
            .await
            .unwrap();
        assert_eq!(hash, HASH);

        let calls = capture.0.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to, hookah_core::DEFAULT_HOOK);
    }

    #[tokio::test]
    async fn invalid_form_is_an_error() {
        let wallet = Arc::new(WalletSession::from_key(Some(KEY)).unwrap());
        let input = FormInput {
            tick: Some("one".into()),
            ..FormInput::default()
        };

        let err = submit(OrderConfig::default(), wallet, &Capture::default(), &input)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not a whole number"));
    }
}
