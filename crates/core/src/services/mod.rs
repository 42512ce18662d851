pub mod noop;
pub mod traits;

pub use noop::{NoOpNotifier, StaticAccount};
pub use traits::{AccountProvider, NotificationService, TransactionSubmitter};
