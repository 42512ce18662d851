use alloy::primitives::{
    Address, U256, address,
    aliases::{I24, U24},
};

use super::{
    order::OrderParameters,
    primitives::{PoolKey, TokenInfo, TokenPair},
};

/// Where `placeOrder` arguments other than the pool key come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParameterSource {
    /// Tick, amount and direction are read from the form.
    #[default]
    Form,
    /// Tick, amount and direction are the configured [`FixedOrder`] values;
    /// form text only feeds the summary line.
    Fixed,
}

/// What happens to the form text after an order is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    #[default]
    Retain,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedOrder {
    pub tick_to_sell_at: I24,
    pub zero_for_one: bool,
    pub input_amount: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfig {
    /// Contract receiving the `placeOrder` call.
    pub hook_contract: Address,
    pub pool: PoolKey,
    pub tokens: TokenPair,
    pub source: ParameterSource,
    pub reset: ResetPolicy,
    pub fixed: FixedOrder,
}

pub const DEFAULT_HOOK: Address = address!("0x256c1e930D23174cBad9A0c96099fb35bB531040");
pub const DEFAULT_CURRENCY0: Address = address!("0x04A7879B5bDc08Fd0cf232DCf0ccB1dB7AE86abf");
pub const DEFAULT_CURRENCY1: Address = address!("0x8683B74A60f2c6Eb8215Eb88416B745E86DDbE2d");
pub const DEFAULT_TICK_SPACING: i32 = 60;
pub const DEFAULT_TICK: i32 = 121;

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            hook_contract: DEFAULT_HOOK,
            pool: PoolKey {
                currency0: DEFAULT_CURRENCY0,
                currency1: DEFAULT_CURRENCY1,
                fee: U24::from(hookah_abi::DYNAMIC_FEE_FLAG),
                tick_spacing: I24::try_from(DEFAULT_TICK_SPACING).expect("60 fits in int24"),
                hooks: DEFAULT_HOOK,
            },
            tokens: TokenPair {
                token0: TokenInfo::new("HOOKah", 18),
                token1: TokenInfo::new("USDC", 18),
            },
            source: ParameterSource::default(),
            reset: ResetPolicy::default(),
            fixed: FixedOrder {
                tick_to_sell_at: I24::try_from(DEFAULT_TICK).expect("121 fits in int24"),
                zero_for_one: false,
                input_amount: U256::from(1),
            },
        }
    }
}

impl OrderConfig {
    pub fn fixed_parameters(&self) -> OrderParameters {
        OrderParameters {
            pool: self.pool,
            tick_to_sell_at: self.fixed.tick_to_sell_at,
            zero_for_one: self.fixed.zero_for_one,
            input_amount: self.fixed.input_amount,
        }
    }

    /// Token preselected when the form opens or is cleared.
    pub fn default_token(&self) -> &str {
        &self.tokens.token0.symbol
    }
}
