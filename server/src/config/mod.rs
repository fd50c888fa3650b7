//! Configuration for the ledger server

mod settings;

pub use settings::{ConfigError, Settings};
