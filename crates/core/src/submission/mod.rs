pub mod handler;

pub use handler::{Dispatched, NotificationHandle, SubmissionHandler};
