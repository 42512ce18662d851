use alloy::primitives::{U256, aliases::I24};
use hookah_abi::ILimitOrderHook::placeOrderCall;

use super::primitives::PoolKey;

/// Arguments of a single `placeOrder` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderParameters {
    pub pool: PoolKey,
    pub tick_to_sell_at: I24,
    pub zero_for_one: bool,
    pub input_amount: U256,
}

impl OrderParameters {
    pub fn to_call(&self) -> placeOrderCall {
        placeOrderCall {
            key: self.pool.into(),
            tickToSellAt: self.tick_to_sell_at,
            zeroForOne: self.zero_for_one,
            inputAmount: self.input_amount,
        }
    }
}

impl From<placeOrderCall> for OrderParameters {
    fn from(call: placeOrderCall) -> Self {
        Self {
            pool: call.key.into(),
            tick_to_sell_at: call.tickToSellAt,
            zero_for_one: call.zeroForOne,
            input_amount: call.inputAmount,
        }
    }
}
