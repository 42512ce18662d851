pub mod features;
pub mod home;

pub use features::{FEATURES, FeaturesScreen};
pub use home::{Field, HomeScreen, TxStatus};
