//! Aggregation helpers for period totals and category breakdowns.

use chrono::{DateTime, Utc};
use pocketbook_domain::{Category, TimePeriod, Transaction, TransactionKind};

/// Income, expense, and their difference over a window. Transfers are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodTotals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl PeriodTotals {
    fn from_parts(income: f64, expense: f64) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// Income and expense recorded under one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotals {
    pub category: Category,
    pub income: f64,
    pub expense: f64,
}

/// Read-only projections over a transaction snapshot.
pub struct SummaryService;

impl SummaryService {
    /// Totals for transactions dated within `start..=now`.
    pub fn totals_between(
        transactions: &[Transaction],
        start: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> PeriodTotals {
        let (income, expense) = sum_income_expense(
            transactions
                .iter()
                .filter(|txn| txn.date >= start && txn.date <= now),
        );
        PeriodTotals::from_parts(income, expense)
    }

    /// Totals from the start of the current `period` through `now`.
    pub fn period_totals(
        transactions: &[Transaction],
        period: TimePeriod,
        now: DateTime<Utc>,
    ) -> PeriodTotals {
        Self::totals_between(transactions, period.period_start(now), now)
    }

    /// Per-category totals in catalogue order, omitting categories with no activity.
    pub fn category_summary(transactions: &[Transaction]) -> Vec<CategoryTotals> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let (income, expense) = sum_income_expense(
                    transactions.iter().filter(|txn| txn.category == category),
                );
                (income > 0.0 || expense > 0.0).then_some(CategoryTotals {
                    category,
                    income,
                    expense,
                })
            })
            .collect()
    }
}

/// Sums income and expense amounts, skipping transfers.
pub(crate) fn sum_income_expense<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
) -> (f64, f64) {
    transactions.fold((0.0, 0.0), |(income, expense), txn| match txn.kind {
        TransactionKind::Income => (income + txn.amount, expense),
        TransactionKind::Expense => (income, expense + txn.amount),
        TransactionKind::Transfer => (income, expense),
    })
}
