use std::sync::Arc;

use alloy::primitives::Address;
use tracing::info;

use crate::{
    encoder::{CacheKey, CallCache, build_calls},
    error::{Error, FormError, SubmissionError},
    services::traits::{AccountProvider, NotificationService, TransactionSubmitter},
    submission::{Dispatched, SubmissionHandler},
    types::{
        config::{OrderConfig, ParameterSource, ResetPolicy},
        form::FormState,
        payload::CallPayload,
        submission::SubmissionResult,
    },
    validation,
};

pub const CONNECT_PROMPT: &str = "Connect your wallet to place a limit order";

/// What the submit area of the form should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitView {
    /// No wallet connected; show [`CONNECT_PROMPT`] instead of a submit control.
    ConnectPrompt,
    Ready(Vec<CallPayload>),
    Invalid(FormError),
}

#[derive(Debug)]
pub enum SubmitOutcome {
    NotConnected,
    Invalid(FormError),
    Placed(Dispatched),
    Failed(SubmissionError),
}

impl SubmitOutcome {
    /// Folds the outcome into a result. Not being connected is not an error,
    /// so it comes back as `Ok(None)`.
    pub fn into_result(self) -> Result<Option<Dispatched>, Error> {
        match self {
            SubmitOutcome::NotConnected => Ok(None),
            SubmitOutcome::Placed(dispatched) => Ok(Some(dispatched)),
            SubmitOutcome::Invalid(error) => Err(error.into()),
            SubmitOutcome::Failed(error) => Err(error.into()),
        }
    }
}

/// Owns the limit-order form and everything derived from it.
pub struct OrderForm {
    config: OrderConfig,
    state: FormState,
    cache: CallCache,
    accounts: Arc<dyn AccountProvider>,
    handler: SubmissionHandler,
}

impl OrderForm {
    pub fn new(
        config: OrderConfig,
        accounts: Arc<dyn AccountProvider>,
        notifier: Arc<dyn NotificationService>,
    ) -> Self {
        let state = FormState::new(config.default_token());
        Self {
            config,
            state,
            cache: CallCache::new(),
            accounts,
            handler: SubmissionHandler::new(notifier),
        }
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn account(&self) -> Option<Address> {
        self.accounts.account()
    }

    pub fn set_tick_amount(&mut self, value: impl Into<String>) {
        self.state.tick_amount = value.into();
    }

    pub fn set_token_amount(&mut self, value: impl Into<String>) {
        self.state.token_amount = value.into();
    }

    pub fn select_token(&mut self, symbol: impl Into<String>) {
        self.state.selected_token = symbol.into();
    }

    pub fn summary(&self) -> String {
        self.state.summary()
    }

    /// The call list for the current account and form, rebuilt only when its
    /// inputs changed.
    pub fn calls(&mut self) -> Result<&[CallPayload], FormError> {
        let inputs = match self.config.source {
            ParameterSource::Form => Some(self.state.clone()),
            ParameterSource::Fixed => None,
        };
        let key = CacheKey {
            account: self.accounts.account(),
            inputs,
        };

        let state = &self.state;
        let config = &self.config;
        self.cache.get_or_try_build(key, |account| {
            if account.is_none() {
                return Ok(Vec::new());
            }
            let params = validation::resolve_parameters(state, config)?;
            Ok(build_calls(&params, config.hook_contract, account))
        })
    }

    pub fn cache(&self) -> &CallCache {
        &self.cache
    }

    pub fn view(&mut self) -> SubmitView {
        match self.calls() {
            Ok([]) => SubmitView::ConnectPrompt,
            Ok(calls) => SubmitView::Ready(calls.to_vec()),
            Err(error) => SubmitView::Invalid(error),
        }
    }

    /// Runs one submission attempt end to end and routes the outcome to the
    /// matching callback.
    pub async fn submit(&mut self, submitter: &dyn TransactionSubmitter) -> SubmitOutcome {
        let calls = match self.view() {
            SubmitView::ConnectPrompt => return SubmitOutcome::NotConnected,
            SubmitView::Invalid(error) => return SubmitOutcome::Invalid(error),
            SubmitView::Ready(calls) => calls,
        };

        info!(calls = calls.len(), summary = %self.summary(), "submitting limit order");
        let result = submitter.submit(&calls).await;

        let handled = result.and_then(|result| self.on_success(&result));
        match handled {
            Ok(dispatched) => SubmitOutcome::Placed(dispatched),
            Err(error) => {
                self.on_error(&error);
                SubmitOutcome::Failed(error)
            }
        }
    }

    pub fn on_success(&mut self, result: &SubmissionResult) -> Result<Dispatched, SubmissionError> {
        let dispatched = self.handler.handle_success(result)?;
        if self.config.reset == ResetPolicy::Clear {
            self.state = FormState::new(self.config.default_token());
        }
        Ok(dispatched)
    }

    pub fn on_error(&self, error: &SubmissionError) {
        self.handler.handle_error(error);
    }
}
