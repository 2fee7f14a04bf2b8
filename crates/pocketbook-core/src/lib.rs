//! pocketbook-core
//!
//! Ledger store, edit-window policy, and derived views for Pocketbook.
//! Depends on pocketbook-domain. No CLI, no terminal I/O, no storage.

pub mod chart_service;
pub mod edit_window;
pub mod error;
pub mod filter;
pub mod format;
pub mod ledger_store;
pub mod sample_data;
pub mod summary_service;
pub mod time;
pub mod validation;

pub use chart_service::*;
pub use edit_window::*;
pub use error::{CoreError, ValidationError};
pub use filter::*;
pub use format::*;
pub use ledger_store::*;
pub use summary_service::*;
pub use time::*;

#[cfg(test)]
mod tests;
