#![doc(test(attr(deny(warnings))))]

//! Pocketbook is a personal finance ledger: accounts with derived balances,
//! income, expense and transfer records guarded by an editing window, and
//! read-only views over the history. This crate is the facade over the
//! domain, core and config crates plus the `pocketbook_cli` shell.

pub mod cli;
pub mod errors;
pub mod utils;

pub use pocketbook_config as config;
pub use pocketbook_core as ledger;
pub use pocketbook_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocketbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
