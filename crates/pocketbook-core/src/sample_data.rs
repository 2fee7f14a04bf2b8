//! Starter accounts and the February 2026 demo history.

use chrono::{DateTime, NaiveDate, Utc};
use pocketbook_domain::{
    start_of_day, Account, AccountId, Category, Division, Transaction, TransactionDraft,
    TransactionId, TransactionKind,
};

use crate::{error::CoreError, ledger_store::LedgerStore};

/// Cash, Bank Account, and Digital Wallet with their opening balances.
pub fn default_accounts() -> Vec<Account> {
    vec![
        Account::with_id(AccountId::from("cash"), "Cash", "💵", 5000.0),
        Account::with_id(AccountId::from("bank"), "Bank Account", "🏦", 25000.0),
        Account::with_id(AccountId::from("wallet"), "Digital Wallet", "📱", 3000.0),
    ]
}

struct Entry {
    id: &'static str,
    kind: TransactionKind,
    amount: f64,
    description: &'static str,
    category: Category,
    division: Division,
    account: &'static str,
    day: u32,
}

const ENTRIES: [Entry; 8] = [
    Entry {
        id: "1",
        kind: TransactionKind::Income,
        amount: 50000.0,
        description: "Monthly Salary",
        category: Category::Salary,
        division: Division::Office,
        account: "bank",
        day: 1,
    },
    Entry {
        id: "2",
        kind: TransactionKind::Expense,
        amount: 2500.0,
        description: "Grocery shopping",
        category: Category::Food,
        division: Division::Personal,
        account: "cash",
        day: 2,
    },
    Entry {
        id: "3",
        kind: TransactionKind::Expense,
        amount: 1500.0,
        description: "Uber rides",
        category: Category::Transport,
        division: Division::Office,
        account: "wallet",
        day: 3,
    },
    Entry {
        id: "4",
        kind: TransactionKind::Expense,
        amount: 800.0,
        description: "Netflix & Spotify",
        category: Category::Entertainment,
        division: Division::Personal,
        account: "bank",
        day: 3,
    },
    Entry {
        id: "5",
        kind: TransactionKind::Income,
        amount: 15000.0,
        description: "Freelance project",
        category: Category::Freelance,
        division: Division::Personal,
        account: "wallet",
        day: 4,
    },
    Entry {
        id: "6",
        kind: TransactionKind::Expense,
        amount: 3000.0,
        description: "Fuel for car",
        category: Category::Fuel,
        division: Division::Personal,
        account: "cash",
        day: 5,
    },
    Entry {
        id: "7",
        kind: TransactionKind::Expense,
        amount: 12000.0,
        description: "Monthly rent",
        category: Category::Rent,
        division: Division::Personal,
        account: "bank",
        day: 1,
    },
    Entry {
        id: "8",
        kind: TransactionKind::Expense,
        amount: 5000.0,
        description: "Doctor visit",
        category: Category::Medical,
        division: Division::Personal,
        account: "bank",
        day: 4,
    },
];

fn sample_day(day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(2026, 2, day).map(start_of_day)
}

/// Demo transactions dated and created in early February 2026.
pub fn sample_transactions() -> Vec<Transaction> {
    ENTRIES
        .iter()
        .filter_map(|entry| {
            let date = sample_day(entry.day)?;
            let draft = TransactionDraft::new(
                entry.kind,
                AccountId::from(entry.account),
                entry.amount,
                entry.description,
                date,
            )
            .with_category(entry.category)
            .with_division(entry.division);
            Some(Transaction::from_draft(draft, TransactionId::from(entry.id), date))
        })
        .collect()
}

/// Loads the default accounts and demo history into `store`.
pub fn seed(store: &mut LedgerStore) -> Result<(), CoreError> {
    for account in default_accounts() {
        store.insert_account(account)?;
    }
    for transaction in sample_transactions() {
        store.insert_transaction(transaction)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_balances_fold_sample_history_over_openings() {
        let mut store = LedgerStore::new();
        seed(&mut store).unwrap();
        assert_eq!(store.accounts().len(), 3);
        assert_eq!(store.transactions().len(), 8);
        let balance = |id: &str| store.account(&AccountId::from(id)).unwrap().balance;
        assert_eq!(balance("cash"), 5000.0 - 2500.0 - 3000.0);
        assert_eq!(balance("bank"), 25000.0 + 50000.0 - 800.0 - 12000.0 - 5000.0);
        assert_eq!(balance("wallet"), 3000.0 - 1500.0 + 15000.0);
    }

    #[test]
    fn seeding_twice_is_rejected() {
        let mut store = LedgerStore::new();
        seed(&mut store).unwrap();
        assert!(matches!(
            seed(&mut store),
            Err(CoreError::DuplicateAccount(_))
        ));
    }
}
