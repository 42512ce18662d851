pub mod commands;
pub mod config;
pub mod logging;
pub mod notify;
pub mod provider;
pub mod submitter;
pub mod ui;
pub mod wallet;
