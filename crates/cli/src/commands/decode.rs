use alloy::primitives::hex;
use hookah_core::{PayloadError, decode_place_order};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("calldata is not hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// `placeOrder` arguments, formatted for display.
#[derive(Debug, Serialize, PartialEq)]
pub struct DecodedOrder {
    pub currency0: String,
    pub currency1: String,
    pub fee: String,
    pub tick_spacing: String,
    pub hooks: String,
    pub tick_to_sell_at: String,
    pub zero_for_one: bool,
    pub input_amount: String,
}

pub fn decode(calldata: &str) -> Result<DecodedOrder, DecodeError> {
    let bytes = hex::decode(calldata.trim())?;
    let params = decode_place_order(&bytes)?;

    Ok(DecodedOrder {
        currency0: params.pool.currency0.to_checksum(None),
        currency1: params.pool.currency1.to_checksum(None),
        fee: params.pool.fee.to_string(),
        tick_spacing: params.pool.tick_spacing.to_string(),
        hooks: params.pool.hooks.to_checksum(None),
        tick_to_sell_at: params.tick_to_sell_at.to_string(),
        zero_for_one: params.zero_for_one,
        input_amount: params.input_amount.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookah_core::{OrderConfig, encode_place_order};

    #[test]
    fn decodes_encoded_order() {
        let calldata = encode_place_order(&OrderConfig::default().fixed_parameters()).to_string();
        let decoded = decode(&calldata).unwrap();

        assert_eq!(decoded.fee, "8388608");
        assert_eq!(decoded.tick_spacing, "60");
        assert_eq!(decoded.tick_to_sell_at, "121");
        assert!(!decoded.zero_for_one);
        assert_eq!(decoded.input_amount, "1");
        assert_eq!(decoded.hooks, hookah_core::DEFAULT_HOOK.to_checksum(None));
    }

    #[test]
    fn rejects_non_hex_and_foreign_calldata() {
        assert!(matches!(decode("0xzz"), Err(DecodeError::Hex(_))));
        assert!(matches!(decode("0xa9059cbb"), Err(DecodeError::Payload(_))));
    }
}
