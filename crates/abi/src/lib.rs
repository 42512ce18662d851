pub mod limit_order;

pub use limit_order::{DYNAMIC_FEE_FLAG, ILimitOrderHook, PoolKey};
