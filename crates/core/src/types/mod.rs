pub mod config;
pub mod form;
pub mod order;
pub mod payload;
pub mod primitives;
pub mod submission;

pub use config::*;
pub use form::*;
pub use order::*;
pub use payload::*;
pub use primitives::*;
pub use submission::*;
