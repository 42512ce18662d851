// src/limit_order.rs
use alloy::sol;

sol! {
    // ---------- Types from v4-core ----------

    /// PoolKey from PoolKey.sol
    struct PoolKey {
        address currency0; // Lower-sorted currency of the pool
        address currency1; // Higher-sorted currency of the pool
        uint24 fee; // 0x800000 flags a dynamic fee
        int24 tickSpacing;
        address hooks; // IHooks implementation bound to the pool
    }

    // ---------- Limit order hook ----------

    /// Entry point of the limit-order hook deployed next to the pool.
    #[sol(rpc)]
    interface ILimitOrderHook {
        function placeOrder(
            PoolKey calldata key,
            int24 tickToSellAt,
            bool zeroForOne,
            uint256 inputAmount
        ) external returns (int24);
    }
}

/// Flag stored in `PoolKey.fee` when the hook controls the swap fee.
pub const DYNAMIC_FEE_FLAG: u32 = 0x80_0000;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    #[test]
    fn place_order_selector_matches_signature() {
        assert_eq!(
            ILimitOrderHook::placeOrderCall::SIGNATURE,
            "placeOrder((address,address,uint24,int24,address),int24,bool,uint256)"
        );
        let expected = alloy::primitives::keccak256(ILimitOrderHook::placeOrderCall::SIGNATURE);
        assert_eq!(ILimitOrderHook::placeOrderCall::SELECTOR, expected[..4]);
    }
}
