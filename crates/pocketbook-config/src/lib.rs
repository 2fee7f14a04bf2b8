//! pocketbook-config
//!
//! User preferences for the ledger shell and their JSON persistence.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::{ConfigManager, HOME_ENV};
pub use model::Config;
