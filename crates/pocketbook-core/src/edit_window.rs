//! Policy deciding whether a transaction may still be edited or removed.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use pocketbook_domain::Transaction;

pub const DEFAULT_EDIT_WINDOW_HOURS: u32 = 12;

/// Period after creation during which a transaction stays mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditWindow {
    duration: Duration,
}

impl Default for EditWindow {
    fn default() -> Self {
        Self::from_hours(DEFAULT_EDIT_WINDOW_HOURS)
    }
}

impl EditWindow {
    pub fn from_hours(hours: u32) -> Self {
        Self {
            duration: Duration::hours(hours as i64),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn hours(&self) -> i64 {
        self.duration.num_hours()
    }

    /// `true` while strictly less than the window has elapsed since `created_at`.
    pub fn allows(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(created_at) < self.duration
    }

    pub fn permits(&self, transaction: &Transaction, now: DateTime<Utc>) -> bool {
        self.allows(transaction.created_at, now)
    }

    pub fn closes_at(&self, transaction: &Transaction) -> DateTime<Utc> {
        transaction.created_at + self.duration
    }

    /// Time left before the window closes, or `None` once it has.
    pub fn remaining(&self, transaction: &Transaction, now: DateTime<Utc>) -> Option<Duration> {
        self.permits(transaction, now)
            .then(|| self.closes_at(transaction).signed_duration_since(now))
    }
}

/// Checks the default 12-hour window.
pub fn can_edit(transaction: &Transaction, now: DateTime<Utc>) -> bool {
    EditWindow::default().permits(transaction, now)
}

/// Result of an update or delete request. Declines are expected outcomes,
/// not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    NotFound,
    WindowExpired,
}

impl EditOutcome {
    pub fn applied(self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EditOutcome::Applied => "applied",
            EditOutcome::NotFound => "transaction not found",
            EditOutcome::WindowExpired => "editing window has expired",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pocketbook_domain::{TransactionDraft, TransactionId};

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap()
    }

    fn transaction() -> Transaction {
        Transaction::from_draft(
            TransactionDraft::expense("cash".into(), 10.0, "Tea", created()),
            TransactionId::from("t"),
            created(),
        )
    }

    #[test]
    fn boundary_is_strict() {
        let txn = transaction();
        let just_before = created() + Duration::hours(12) - Duration::seconds(1);
        let exactly = created() + Duration::hours(12);
        let just_after = created() + Duration::hours(12) + Duration::seconds(1);
        assert!(can_edit(&txn, just_before));
        assert!(!can_edit(&txn, exactly));
        assert!(!can_edit(&txn, just_after));
    }

    #[test]
    fn clock_behind_creation_still_allows_edits() {
        let txn = transaction();
        assert!(can_edit(&txn, created() - Duration::minutes(5)));
    }

    #[test]
    fn custom_window_and_remaining_time() {
        let window = EditWindow::from_hours(1);
        let txn = transaction();
        let now = created() + Duration::minutes(45);
        assert_eq!(window.remaining(&txn, now), Some(Duration::minutes(15)));
        assert_eq!(window.remaining(&txn, created() + Duration::hours(2)), None);
        assert_eq!(window.closes_at(&txn), created() + Duration::hours(1));
    }

    #[test]
    fn outcome_reports_applied_only_for_success() {
        assert!(EditOutcome::Applied.applied());
        assert!(!EditOutcome::NotFound.applied());
        assert!(!EditOutcome::WindowExpired.applied());
        assert_eq!(
            EditOutcome::WindowExpired.to_string(),
            "editing window has expired"
        );
    }
}
