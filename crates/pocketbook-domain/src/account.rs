use serde::{Deserialize, Serialize};

use crate::common::*;

/// A named money pool tracked by the ledger.
///
/// `balance` is derived: the ledger store recomputes it from
/// `opening_balance` and the transaction history after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub icon: String,
    pub opening_balance: f64,
    pub balance: f64,
}

impl Account {
    /// Creates a new account with a freshly generated identifier.
    pub fn new(name: impl Into<String>, icon: impl Into<String>, opening_balance: f64) -> Self {
        Self::with_id(AccountId::generate(), name, icon, opening_balance)
    }

    /// Creates an account with a caller-chosen identifier.
    pub fn with_id(
        id: AccountId,
        name: impl Into<String>,
        icon: impl Into<String>,
        opening_balance: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            opening_balance,
            balance: opening_balance,
        }
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}
