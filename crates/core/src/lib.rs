pub mod encoder;
pub mod error;
pub mod form;
pub mod services;
pub mod submission;
pub mod types;
pub mod validation;

pub use encoder::*;
pub use error::*;
pub use form::*;
pub use services::*;
pub use submission::*;
pub use types::*;
pub use validation::*;
