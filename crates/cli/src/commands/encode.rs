use std::sync::Arc;

use alloy::primitives::Address;
use hookah_core::{CallPayload, FormError, NoOpNotifier, OrderConfig, OrderForm, StaticAccount};
use serde::Serialize;

use super::FormInput;

#[derive(Debug, Serialize, PartialEq)]
pub struct CallJson {
    pub to: String,
    pub data: String,
    pub value: String,
}

impl From<&CallPayload> for CallJson {
    fn from(call: &CallPayload) -> Self {
        Self {
            to: call.to.to_checksum(None),
            data: call.data.to_string(),
            value: call.value.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EncodeOutput {
    pub summary: String,
    pub calls: Vec<CallJson>,
}

/// The call list the form would hand to the wallet for `account`.
pub fn encode(
    config: OrderConfig,
    account: Option<Address>,
    input: &FormInput,
) -> Result<EncodeOutput, FormError> {
    let mut form = OrderForm::new(
        config,
        Arc::new(StaticAccount(account)),
        Arc::new(NoOpNotifier),
    );
    input.apply(&mut form);

    let calls = form.calls()?.iter().map(CallJson::from).collect();
    Ok(EncodeOutput {
        summary: form.summary(),
        calls,
    })
}
