use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolCall,
};
use hookah_abi::ILimitOrderHook::placeOrderCall;

use crate::{
    error::PayloadError,
    types::{order::OrderParameters, payload::CallPayload},
};

pub fn encode_place_order(params: &OrderParameters) -> Bytes {
    params.to_call().abi_encode().into()
}

pub fn decode_place_order(data: &[u8]) -> Result<OrderParameters, PayloadError> {
    let call = placeOrderCall::abi_decode(data)?;
    Ok(call.into())
}

/// A zero-value `placeOrder` call against `destination`.
pub fn build_call(params: &OrderParameters, destination: Address) -> CallPayload {
    CallPayload {
        to: destination,
        data: encode_place_order(params),
        value: U256::ZERO,
    }
}

/// The call list handed to the submitter. Without a connected account there
/// is nothing to submit and the list is empty.
pub fn build_calls(
    params: &OrderParameters,
    destination: Address,
    account: Option<Address>,
) -> Vec<CallPayload> {
    match account {
        Some(_) => vec![build_call(params, destination)],
        None => Vec::new(),
    }
}
