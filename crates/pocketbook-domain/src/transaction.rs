//! Domain models for ledger transactions, drafts, and partial updates.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{category::*, common::*};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Direction of a transaction's balance effect.
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Transfer => "transfer",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            "transfer" => Ok(TransactionKind::Transfer),
            other => Err(ParseEnumError::new("transaction type", other)),
        }
    }
}

/// A recorded income, expense, or transfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub division: Division,
    pub account_id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<AccountId>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Materializes a draft with a system-assigned id and creation time.
    pub fn from_draft(draft: TransactionDraft, id: TransactionId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description,
            category: draft.category,
            division: draft.division,
            account_id: draft.account_id,
            to_account_id: draft.to_account_id,
            date: draft.date,
            created_at,
        }
    }

    pub fn is_transfer(&self) -> bool {
        self.kind == TransactionKind::Transfer
    }

    /// Net change this transaction applies to `account`.
    pub fn balance_effect(&self, account: &AccountId) -> f64 {
        match self.kind {
            TransactionKind::Income if &self.account_id == account => self.amount,
            TransactionKind::Expense if &self.account_id == account => -self.amount,
            TransactionKind::Transfer => {
                let mut effect = 0.0;
                if &self.account_id == account {
                    effect -= self.amount;
                }
                if self.to_account_id.as_ref() == Some(account) {
                    effect += self.amount;
                }
                effect
            }
            _ => 0.0,
        }
    }

    /// Merges the supplied fields, leaving `id` and `created_at` untouched.
    ///
    /// Moving away from `transfer` drops the stored destination. A destination
    /// supplied in the patch is always kept, so validation can reject it.
    pub fn apply_patch(&mut self, patch: TransactionPatch) {
        let explicit_destination = patch.to_account_id.is_some();
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(division) = patch.division {
            self.division = division;
        }
        if let Some(account_id) = patch.account_id {
            self.account_id = account_id;
        }
        if let Some(to_account_id) = patch.to_account_id {
            self.to_account_id = Some(to_account_id);
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if self.kind != TransactionKind::Transfer && !explicit_destination {
            self.to_account_id = None;
        }
    }

    /// Glyph used when listing the transaction.
    pub fn icon(&self) -> &'static str {
        if self.is_transfer() {
            "🔄"
        } else {
            self.category.icon()
        }
    }

    /// Sign shown in front of the amount in listings.
    pub fn sign_prefix(&self) -> &'static str {
        match self.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
            TransactionKind::Transfer => "",
        }
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {} [{}]", self.icon(), self.description, self.kind)
    }
}

/// Caller-supplied fields for a new transaction; the store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub division: Division,
    pub account_id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<AccountId>,
    pub date: DateTime<Utc>,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        account_id: AccountId,
        amount: f64,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            category: Category::default(),
            division: Division::default(),
            account_id,
            to_account_id: None,
            date,
        }
    }

    pub fn income(
        account_id: AccountId,
        amount: f64,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(TransactionKind::Income, account_id, amount, description, date)
    }

    pub fn expense(
        account_id: AccountId,
        amount: f64,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(TransactionKind::Expense, account_id, amount, description, date)
    }

    /// Transfers are always filed under `other` / `personal`.
    pub fn transfer(
        from: AccountId,
        to: AccountId,
        amount: f64,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        let mut draft = Self::new(TransactionKind::Transfer, from, amount, description, date);
        draft.to_account_id = Some(to);
        draft
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_division(mut self, division: Division) -> Self {
        self.division = division;
        self
    }
}

/// Partial update applied by `update_transaction`. `None` leaves the field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<Division>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self == &TransactionPatch::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn division(mut self, division: Division) -> Self {
        self.division = Some(division);
        self
    }

    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn to_account(mut self, account_id: AccountId) -> Self {
        self.to_account_id = Some(account_id);
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}
