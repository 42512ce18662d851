use alloy::primitives::{
    Address, U256,
    aliases::{I24, U24},
};
use hookah_core::{
    FixedOrder, OrderConfig, ParameterSource, PoolKey, ResetPolicy, TokenInfo, TokenPair,
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "order.toml";
const APP_DIR: &str = "hookah";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub order: OrderSection,
    pub pool: PoolSection,
    pub tokens: TokensSection,
    pub fixed: FixedSection,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrderSection {
    pub hook: Address,
    pub source: SourceSetting,
    pub reset: ResetSetting,
    pub confirmations: u64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SourceSetting {
    #[default]
    Form,
    Fixed,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResetSetting {
    #[default]
    Retain,
    Clear,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PoolSection {
    pub currency0: Address,
    pub currency1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
    pub hooks: Address,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TokensSection {
    pub token0: TokenSection,
    pub token1: TokenSection,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct TokenSection {
    pub symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FixedSection {
    pub tick_to_sell_at: i32,
    pub zero_for_one: bool,
    /// Raw base units, decimal or 0x-prefixed hex.
    pub input_amount: String,
}

fn default_decimals() -> u8 {
    18
}

impl Default for OrderSection {
    fn default() -> Self {
        Self {
            hook: hookah_core::DEFAULT_HOOK,
            source: SourceSetting::default(),
            reset: ResetSetting::default(),
            confirmations: 1,
        }
    }
}

impl Default for PoolSection {
    fn default() -> Self {
        Self {
            currency0: hookah_core::DEFAULT_CURRENCY0,
            currency1: hookah_core::DEFAULT_CURRENCY1,
            fee: hookah_abi::DYNAMIC_FEE_FLAG,
            tick_spacing: hookah_core::DEFAULT_TICK_SPACING,
            hooks: hookah_core::DEFAULT_HOOK,
        }
    }
}

impl Default for TokensSection {
    fn default() -> Self {
        Self {
            token0: TokenSection {
                symbol: "HOOKah".into(),
                decimals: default_decimals(),
            },
            token1: TokenSection {
                symbol: "USDC".into(),
                decimals: default_decimals(),
            },
        }
    }
}

impl Default for FixedSection {
    fn default() -> Self {
        Self {
            tick_to_sell_at: hookah_core::DEFAULT_TICK,
            zero_for_one: false,
            input_amount: "1".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse toml at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("pool fee {0} does not fit in uint24")]
    FeeOutOfRange(u32),
    #[error("tick spacing {0} does not fit in int24")]
    TickSpacingOutOfRange(i32),
    #[error("fixed tick {0} does not fit in int24")]
    TickOutOfRange(i32),
    #[error("fixed input amount {0:?} is not a uint256")]
    InvalidAmount(String),
    #[error("token0 and token1 share the symbol {0:?}")]
    DuplicateSymbol(String),
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(config)
}

/// Loads `explicit` if given. Otherwise tries `./order.toml`, then
/// `<config dir>/hookah/order.toml`, then falls back to built-in defaults.
pub fn locate_config(explicit: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        return Ok((load_config(path)?, Some(path.to_path_buf())));
    }

    let candidates = std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(dirs::config_dir().map(|dir| dir.join(APP_DIR).join(DEFAULT_CONFIG_PATH)));

    for path in candidates {
        if path.is_file() {
            return Ok((load_config(&path)?, Some(path)));
        }
    }

    Ok((AppConfig::default(), None))
}

impl AppConfig {
    pub fn to_order_config(&self) -> Result<OrderConfig, ConfigError> {
        let fee = U24::try_from(self.pool.fee)
            .map_err(|_| ConfigError::FeeOutOfRange(self.pool.fee))?;
        let tick_spacing = I24::try_from(self.pool.tick_spacing)
            .map_err(|_| ConfigError::TickSpacingOutOfRange(self.pool.tick_spacing))?;
        let tick_to_sell_at = I24::try_from(self.fixed.tick_to_sell_at)
            .map_err(|_| ConfigError::TickOutOfRange(self.fixed.tick_to_sell_at))?;
        let input_amount = parse_u256(&self.fixed.input_amount)
            .ok_or_else(|| ConfigError::InvalidAmount(self.fixed.input_amount.clone()))?;

        if self.tokens.token0.symbol == self.tokens.token1.symbol {
            return Err(ConfigError::DuplicateSymbol(
                self.tokens.token0.symbol.clone(),
            ));
        }

        Ok(OrderConfig {
            hook_contract: self.order.hook,
            pool: PoolKey {
                currency0: self.pool.currency0,
                currency1: self.pool.currency1,
                fee,
                tick_spacing,
                hooks: self.pool.hooks,
            },
            tokens: TokenPair {
                token0: TokenInfo::new(&self.tokens.token0.symbol, self.tokens.token0.decimals),
                token1: TokenInfo::new(&self.tokens.token1.symbol, self.tokens.token1.decimals),
            },
            source: match self.order.source {
                SourceSetting::Form => ParameterSource::Form,
                SourceSetting::Fixed => ParameterSource::Fixed,
            },
            reset: match self.order.reset {
                ResetSetting::Retain => ResetPolicy::Retain,
                ResetSetting::Clear => ResetPolicy::Clear,
            },
            fixed: FixedOrder {
                tick_to_sell_at,
                zero_for_one: self.fixed.zero_for_one,
                input_amount,
            },
        })
    }
}

pub fn parse_u256(s: &str) -> Option<U256> {
    let s = s.trim();
    if let Some(stripped) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        U256::from_str_radix(stripped, 16).ok()
    } else {
        U256::from_str_radix(s, 10).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn parses_example_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("order.example.toml");
        let config = load_config(path).expect("should parse example config");

        assert_eq!(config.order.source, SourceSetting::Form);
        assert_eq!(config.order.reset, ResetSetting::Retain);
        assert_eq!(config.pool.fee, 0x80_0000);
        assert_eq!(config.pool.tick_spacing, 60);
        assert_eq!(config.tokens.token1.symbol, "USDC");

        let order = config.to_order_config().expect("example config is valid");
        assert_eq!(order, OrderConfig::default());
        assert!(order.pool.is_dynamic_fee());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [order]
            source = "fixed"
            reset = "clear"
            "#,
        )
        .unwrap();

        let order = config.to_order_config().unwrap();
        assert_eq!(order.source, ParameterSource::Fixed);
        assert_eq!(order.reset, ResetPolicy::Clear);
        assert_eq!(order.pool, OrderConfig::default().pool);
        assert_eq!(config.order.confirmations, 1);
    }

    #[test]
    fn rejects_values_wider_than_abi_types() {
        let mut config = AppConfig::default();
        config.pool.fee = 0x100_0000;
        assert!(matches!(
            config.to_order_config(),
            Err(ConfigError::FeeOutOfRange(0x100_0000))
        ));

        let mut config = AppConfig::default();
        config.fixed.tick_to_sell_at = -8_388_609;
        assert!(matches!(
            config.to_order_config(),
            Err(ConfigError::TickOutOfRange(_))
        ));

        let mut config = AppConfig::default();
        config.fixed.input_amount = "one".into();
        assert!(matches!(
            config.to_order_config(),
            Err(ConfigError::InvalidAmount(_))
        ));

        let mut config = AppConfig::default();
        config.tokens.token1.symbol = "HOOKah".into();
        assert!(matches!(
            config.to_order_config(),
            Err(ConfigError::DuplicateSymbol(_))
        ));
    }

    #[test]
    fn parses_decimal_and_hex_amounts() {
        assert_eq!(parse_u256("42"), Some(U256::from(42)));
        assert_eq!(parse_u256("0x2a"), Some(U256::from(42)));
        assert_eq!(parse_u256("-1"), None);
    }
}
