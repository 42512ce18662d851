pub mod controller;

pub use controller::{CONNECT_PROMPT, OrderForm, SubmitOutcome, SubmitView};
