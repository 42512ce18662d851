use alloy::primitives::{Address, Bytes, U256};

/// One contract call handed to the transaction submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPayload {
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}
