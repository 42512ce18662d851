pub mod cache;
pub mod calls;

pub use cache::{CacheKey, CallCache};
pub use calls::{build_call, build_calls, decode_place_order, encode_place_order};
