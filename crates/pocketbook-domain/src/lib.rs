//! pocketbook-domain
//!
//! Pure domain models (Account, Transaction, Category, Division, TimePeriod).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod account;
pub mod category;
pub mod common;
pub mod transaction;

pub use account::*;
pub use category::*;
pub use common::*;
pub use transaction::*;
