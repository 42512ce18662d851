use alloy::primitives::{
    Address,
    aliases::{I24, U24},
};

/// Identity of a v4 pool, mirroring the on-chain `PoolKey` struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolKey {
    pub currency0: Address,
    pub currency1: Address,
    pub fee: U24,
    pub tick_spacing: I24,
    pub hooks: Address,
}

impl PoolKey {
    pub fn is_dynamic_fee(&self) -> bool {
        self.fee == U24::from(hookah_abi::DYNAMIC_FEE_FLAG)
    }
}

impl From<PoolKey> for hookah_abi::PoolKey {
    fn from(key: PoolKey) -> Self {
        Self {
            currency0: key.currency0,
            currency1: key.currency1,
            fee: key.fee,
            tickSpacing: key.tick_spacing,
            hooks: key.hooks,
        }
    }
}

impl From<hookah_abi::PoolKey> for PoolKey {
    fn from(key: hookah_abi::PoolKey) -> Self {
        Self {
            currency0: key.currency0,
            currency1: key.currency1,
            fee: key.fee,
            tick_spacing: key.tickSpacing,
            hooks: key.hooks,
        }
    }
}

/// A token offered by the order form's selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub symbol: String,
    pub decimals: u8,
}

impl TokenInfo {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }
}

/// The two sides of the pool as the user sees them. `token0` backs `currency0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub token0: TokenInfo,
    pub token1: TokenInfo,
}

impl TokenPair {
    pub fn symbols(&self) -> [&str; 2] {
        [self.token0.symbol.as_str(), self.token1.symbol.as_str()]
    }

    /// Resolves a symbol to the token it names and whether selling it is a
    /// `currency0 -> currency1` swap.
    pub fn side(&self, symbol: &str) -> Option<(&TokenInfo, bool)> {
        if symbol == self.token0.symbol {
            Some((&self.token0, true))
        } else if symbol == self.token1.symbol {
            Some((&self.token1, false))
        } else {
            None
        }
    }
}
