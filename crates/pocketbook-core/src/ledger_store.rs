//! Authoritative in-memory collection of accounts and transactions.

use std::{collections::HashMap, fmt};

use chrono::{DateTime, Utc};
use pocketbook_domain::{
    Account, AccountId, Transaction, TransactionDraft, TransactionId, TransactionPatch,
};
use tracing::{debug, warn};

use crate::{
    edit_window::{EditOutcome, EditWindow},
    error::CoreError,
    time::{Clock, SystemClock},
    validation,
};

/// Owns every account and transaction and keeps balances consistent with the
/// transaction history.
///
/// Each account's `balance` equals its opening balance plus the net effect of
/// every stored transaction that references it. Balances are recomputed after
/// each successful mutation, so updates and transfer deletions cannot leave
/// them stale.
pub struct LedgerStore {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    clock: Box<dyn Clock>,
    edit_window: EditWindow,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerStore")
            .field("accounts", &self.accounts.len())
            .field("transactions", &self.transactions.len())
            .field("edit_window_hours", &self.edit_window.hours())
            .finish()
    }
}

impl LedgerStore {
    /// Creates an empty store driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty store driven by the supplied clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            accounts: Vec::new(),
            transactions: Vec::new(),
            clock: Box::new(clock),
            edit_window: EditWindow::default(),
        }
    }

    pub fn with_edit_window(mut self, edit_window: EditWindow) -> Self {
        self.edit_window = edit_window;
        self
    }

    pub fn edit_window(&self) -> EditWindow {
        self.edit_window
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Transactions in insertion order. Callers sort for display.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn account(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| &account.id == id)
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| &txn.id == id)
    }

    /// Account name for display, falling back to the raw id.
    pub fn account_label(&self, id: &AccountId) -> String {
        self.account(id)
            .map(|account| account.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Sum of every account balance.
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|account| account.balance).sum()
    }

    /// Recomputes one account's balance directly from history.
    pub fn balance_of(&self, id: &AccountId) -> Option<f64> {
        self.account(id).map(|account| {
            account.opening_balance
                + self
                    .transactions
                    .iter()
                    .map(|txn| txn.balance_effect(id))
                    .sum::<f64>()
        })
    }

    /// Appends a new account with a fresh identifier. Duplicate names are allowed.
    pub fn add_account(
        &mut self,
        name: impl Into<String>,
        icon: impl Into<String>,
        initial_balance: f64,
    ) -> Account {
        let account = Account::new(name, icon, initial_balance);
        debug!(account_id = %account.id, name = %account.name, "account added");
        self.accounts.push(account.clone());
        account
    }

    /// Appends a pre-built account, keeping its identifier.
    pub fn insert_account(&mut self, mut account: Account) -> Result<Account, CoreError> {
        if self.account(&account.id).is_some() {
            return Err(CoreError::DuplicateAccount(account.id));
        }
        account.balance = account.opening_balance;
        self.accounts.push(account.clone());
        self.reconcile_balances();
        debug!(account_id = %account.id, "account inserted");
        Ok(account)
    }

    /// Records a new income, expense, or transfer and adjusts balances.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction, CoreError> {
        let draft = validation::validate_draft(draft, &self.accounts).map_err(|err| {
            warn!(error = %err, "rejected transaction draft");
            err
        })?;
        let transaction = Transaction::from_draft(draft, TransactionId::generate(), self.now());
        self.transactions.push(transaction.clone());
        self.reconcile_balances();
        debug!(
            transaction_id = %transaction.id,
            kind = %transaction.kind,
            amount = transaction.amount,
            account_id = %transaction.account_id,
            "transaction added"
        );
        Ok(transaction)
    }

    /// Moves `amount` from one account to another as a single transfer record.
    pub fn transfer_between_accounts(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: f64,
        description: &str,
        date: DateTime<Utc>,
    ) -> Result<Transaction, CoreError> {
        let draft = TransactionDraft::transfer(from.clone(), to.clone(), amount, description, date);
        self.add_transaction(draft)
    }

    /// Stores an already-materialized transaction, keeping its id and
    /// creation time. Used when seeding history.
    pub fn insert_transaction(&mut self, transaction: Transaction) -> Result<(), CoreError> {
        if self.transaction(&transaction.id).is_some() {
            return Err(CoreError::DuplicateTransaction(transaction.id));
        }
        let transaction = validation::validate_transaction(transaction, &self.accounts)?;
        debug!(transaction_id = %transaction.id, "transaction inserted");
        self.transactions.push(transaction);
        self.reconcile_balances();
        Ok(())
    }

    /// Merges `patch` into the transaction while its edit window is open.
    ///
    /// Declines with `NotFound`/`WindowExpired` and mutates nothing in those
    /// cases. A patch that would break a transaction invariant is a
    /// validation error and also mutates nothing.
    pub fn update_transaction(
        &mut self,
        id: &TransactionId,
        patch: TransactionPatch,
    ) -> Result<EditOutcome, CoreError> {
        let now = self.now();
        let Some(index) = self.position(id) else {
            debug!(transaction_id = %id, "update declined: not found");
            return Ok(EditOutcome::NotFound);
        };
        if !self.edit_window.permits(&self.transactions[index], now) {
            debug!(transaction_id = %id, "update declined: edit window expired");
            return Ok(EditOutcome::WindowExpired);
        }

        let mut candidate = self.transactions[index].clone();
        candidate.apply_patch(patch);
        let candidate = validation::validate_transaction(candidate, &self.accounts)?;
        self.transactions[index] = candidate;
        self.reconcile_balances();
        debug!(transaction_id = %id, "transaction updated");
        Ok(EditOutcome::Applied)
    }

    /// Removes the transaction while its edit window is open, reversing its
    /// balance effect on every account it touched.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> EditOutcome {
        let now = self.now();
        let Some(index) = self.position(id) else {
            debug!(transaction_id = %id, "delete declined: not found");
            return EditOutcome::NotFound;
        };
        if !self.edit_window.permits(&self.transactions[index], now) {
            debug!(transaction_id = %id, "delete declined: edit window expired");
            return EditOutcome::WindowExpired;
        }

        let removed = self.transactions.remove(index);
        self.reconcile_balances();
        debug!(transaction_id = %removed.id, kind = %removed.kind, "transaction deleted");
        EditOutcome::Applied
    }

    /// Whether the transaction can still be edited according to the store clock.
    pub fn can_edit(&self, id: &TransactionId) -> bool {
        self.can_edit_at(id, self.now())
    }

    /// Whether the transaction can still be edited at `now`. Unknown ids are never editable.
    pub fn can_edit_at(&self, id: &TransactionId, now: DateTime<Utc>) -> bool {
        self.transaction(id)
            .map(|txn| self.edit_window.permits(txn, now))
            .unwrap_or(false)
    }

    fn position(&self, id: &TransactionId) -> Option<usize> {
        self.transactions.iter().position(|txn| &txn.id == id)
    }

    fn reconcile_balances(&mut self) {
        let mut effects: HashMap<&AccountId, f64> = HashMap::new();
        for txn in &self.transactions {
            *effects.entry(&txn.account_id).or_default() += txn.balance_effect(&txn.account_id);
            if let Some(to) = &txn.to_account_id {
                *effects.entry(to).or_default() += txn.balance_effect(to);
            }
        }
        let balances: Vec<f64> = self
            .accounts
            .iter()
            .map(|account| {
                account.opening_balance + effects.get(&account.id).copied().unwrap_or_default()
            })
            .collect();
        for (account, balance) in self.accounts.iter_mut().zip(balances) {
            account.balance = balance;
        }
    }
}
