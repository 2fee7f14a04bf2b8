use chrono::{Duration, NaiveDate};
use pocketbook_domain::{start_of_day, Category, Division, Transaction};

/// Criteria for the transaction list. Unset fields match everything; set
/// fields combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Inclusive, from midnight UTC.
    pub date_from: Option<NaiveDate>,
    /// Inclusive of the whole day: matches dates before the following midnight.
    pub date_to: Option<NaiveDate>,
    pub category: Option<Category>,
    pub division: Option<Division>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
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

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(from) = self.date_from {
            if transaction.date < start_of_day(from) {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if transaction.date >= start_of_day(to + Duration::days(1)) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if transaction.category != category {
                return false;
            }
        }
        if let Some(division) = self.division {
            if transaction.division != division {
                return false;
            }
        }
        true
    }

    /// Matching transactions, newest `date` first. Ties list the most recently
    /// inserted transaction first.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut matched: Vec<&Transaction> = transactions
            .iter()
            .rev()
            .filter(|txn| self.matches(txn))
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use pocketbook_domain::{TransactionDraft, TransactionId};

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, d, h, 0, 0).unwrap()
    }

    fn txn(id: &str, draft: TransactionDraft) -> Transaction {
        Transaction::from_draft(draft, TransactionId::from(id), at(10, 0))
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(
                "pay",
                TransactionDraft::income("bank".into(), 100.0, "Pay", at(1, 0))
                    .with_category(Category::Salary)
                    .with_division(Division::Office),
            ),
            txn(
                "food",
                TransactionDraft::expense("cash".into(), 10.0, "Food", at(2, 23))
                    .with_category(Category::Food),
            ),
            txn(
                "fuel",
                TransactionDraft::expense("cash".into(), 30.0, "Fuel", at(3, 8))
                    .with_category(Category::Fuel),
            ),
            txn(
                "late-food",
                TransactionDraft::expense("cash".into(), 5.0, "Snack", at(3, 8))
                    .with_category(Category::Food),
            ),
        ]
    }

    fn ids(list: Vec<&Transaction>) -> Vec<&str> {
        list.into_iter().map(|txn| txn.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_sorts_newest_first() {
        let all = sample();
        assert_eq!(
            ids(TransactionFilter::new().apply(&all)),
            ["late-food", "fuel", "food", "pay"]
        );
    }

    #[test]
    fn date_range_is_inclusive_on_both_days() {
        let all = sample();
        let filter = TransactionFilter::new().from_date(day(1)).to_date(day(2));
        assert_eq!(ids(filter.apply(&all)), ["food", "pay"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let all = sample();
        let filter = TransactionFilter::new()
            .category(Category::Food)
            .division(Division::Personal)
            .from_date(day(3));
        assert_eq!(ids(filter.apply(&all)), ["late-food"]);
        let none = TransactionFilter::new()
            .category(Category::Salary)
            .division(Division::Personal);
        assert!(none.apply(&all).is_empty());
    }
}
