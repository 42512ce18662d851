use alloy::primitives::{U256, aliases::I24, utils::parse_units};

use crate::{
    error::FormError,
    types::{
        config::{OrderConfig, ParameterSource},
        form::FormState,
        order::OrderParameters,
    },
};

/// Builds the `placeOrder` arguments the form currently describes.
///
/// With [`ParameterSource::Fixed`] the form text is ignored entirely.
pub fn resolve_parameters(
    form: &FormState,
    config: &OrderConfig,
) -> Result<OrderParameters, FormError> {
    match config.source {
        ParameterSource::Fixed => Ok(config.fixed_parameters()),
        ParameterSource::Form => validate_form(form, config),
    }
}

pub fn validate_form(form: &FormState, config: &OrderConfig) -> Result<OrderParameters, FormError> {
    let (token, zero_for_one) =
        config
            .tokens
            .side(&form.selected_token)
            .ok_or_else(|| FormError::UnknownToken {
                symbol: form.selected_token.clone(),
            })?;

    let tick_to_sell_at = parse_tick(&form.tick_amount)?;
    let input_amount = parse_amount(&form.token_amount, token.decimals)?;

    Ok(OrderParameters {
        pool: config.pool,
        tick_to_sell_at,
        zero_for_one,
        input_amount,
    })
}

/// Parses the tick field. Empty text is tick `0`; the valid v4 tick range is
/// left to the hook contract.
pub fn parse_tick(text: &str) -> Result<I24, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(I24::ZERO);
    }

    let tick: i64 = text.parse().map_err(|_| FormError::InvalidTick {
        input: text.to_string(),
    })?;

    i32::try_from(tick)
        .ok()
        .and_then(|tick| I24::try_from(tick).ok())
        .ok_or(FormError::TickOutOfRange { tick })
}

/// Parses a human amount (e.g. `"1.5"`) into base units of a token with
/// `decimals` decimals. Empty text is `0`.
pub fn parse_amount(text: &str, decimals: u8) -> Result<U256, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(U256::ZERO);
    }

    if text.starts_with('-') {
        return Err(FormError::NegativeAmount);
    }

    let parsed = parse_units(text, decimals).map_err(|err| FormError::InvalidAmount {
        input: text.to_string(),
        reason: err.to_string(),
    })?;

    Ok(parsed.get_absolute())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(tick: &str, amount: &str, token: &str) -> FormState {
        FormState {
            tick_amount: tick.into(),
            token_amount: amount.into(),
            selected_token: token.into(),
        }
    }

    #[test]
    fn empty_fields_resolve_to_zero() {
        let config = OrderConfig::default();
        let params = validate_form(&form("", "", "HOOKah"), &config).unwrap();

        assert_eq!(params.tick_to_sell_at, I24::ZERO);
        assert_eq!(params.input_amount, U256::ZERO);
        assert!(params.zero_for_one);
        assert_eq!(params.pool, config.pool);
    }

    #[test]
    fn selected_token_picks_direction_and_decimals() {
        let mut config = OrderConfig::default();
        config.tokens.token1.decimals = 6;

        let params = validate_form(&form("-120", "5", "USDC"), &config).unwrap();
        assert!(!params.zero_for_one);
        assert_eq!(params.input_amount, U256::from(5_000_000u64));
        assert_eq!(params.tick_to_sell_at, I24::try_from(-120).unwrap());

        let params = validate_form(&form("121", "1.5", "HOOKah"), &config).unwrap();
        assert!(params.zero_for_one);
        assert_eq!(
            params.input_amount,
            U256::from(1_500_000_000_000_000_000u128)
        );
    }

    #[test]
    fn tick_range_is_not_checked_beyond_int24() {
        // Outside the v4 tick range but still an int24.
        assert_eq!(
            parse_tick("8000000").unwrap(),
            I24::try_from(8_000_000).unwrap()
        );
        assert_eq!(
            parse_tick("8388608"),
            Err(FormError::TickOutOfRange { tick: 8_388_608 })
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(
            parse_tick("12.5"),
            Err(FormError::InvalidTick { .. })
        ));
        assert!(matches!(
            parse_amount("five", 18),
            Err(FormError::InvalidAmount { .. })
        ));
        assert_eq!(parse_amount("-1", 18), Err(FormError::NegativeAmount));
        assert_eq!(
            validate_form(&form("1", "1", "WETH"), &OrderConfig::default()),
            Err(FormError::UnknownToken {
                symbol: "WETH".into()
            })
        );
    }

    #[test]
    fn fixed_source_ignores_form_text() {
        let config = OrderConfig {
            source: ParameterSource::Fixed,
            ..OrderConfig::default()
        };
        let params = resolve_parameters(&form("not a tick", "??", "WETH"), &config).unwrap();

        assert_eq!(params, config.fixed_parameters());
        assert_eq!(params.tick_to_sell_at, I24::try_from(121).unwrap());
        assert!(!params.zero_for_one);
        assert_eq!(params.input_amount, U256::from(1));
    }
}
