use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{
    chart_service::ChartService, edit_window::EditOutcome, ledger_store::LedgerStore,
    summary_service::SummaryService,
    time::{Clock, ManualClock},
};
use pocketbook_domain::{
    AccountId, Category, TimePeriod, TransactionDraft, TransactionId, TransactionKind,
    TransactionPatch,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap()
}

fn ledger() -> (LedgerStore, ManualClock) {
    let clock = ManualClock::new(t0());
    (LedgerStore::with_clock(clock.clone()), clock)
}

#[test]
fn walkthrough_income_expense_transfer_and_category_summary() {
    let (mut store, _) = ledger();
    let a = store.add_account("A", "💵", 0.0).id;
    let b = store.add_account("B", "🏦", 10.0).id;

    store
        .add_transaction(
            TransactionDraft::income(a.clone(), 100.0, "Salary", t0()).with_category(Category::Salary),
        )
        .unwrap();
    assert_eq!(store.account(&a).unwrap().balance, 100.0);
    assert_eq!(store.transactions().len(), 1);

    store
        .add_transaction(
            TransactionDraft::expense(a.clone(), 30.0, "Groceries", t0()).with_category(Category::Food),
        )
        .unwrap();
    assert_eq!(store.account(&a).unwrap().balance, 70.0);

    store
        .transfer_between_accounts(&a, &b, 20.0, "Savings", t0())
        .unwrap();
    assert_eq!(store.account(&a).unwrap().balance, 50.0);
    assert_eq!(store.account(&b).unwrap().balance, 30.0);

    let food = SummaryService::category_summary(store.transactions())
        .into_iter()
        .find(|entry| entry.category == Category::Food)
        .expect("food summary present");
    assert_eq!(food.expense, 30.0);
    assert_eq!(food.income, 0.0);
}

#[test]
fn balances_follow_any_sequence_of_additions() {
    let (mut store, _) = ledger();
    let a = store.add_account("A", "💵", 12.0).id;
    let other = store.add_account("Other", "🏦", 0.0).id;
    let amounts = [5.0, 7.25, 19.5, 3.0, 40.0, 0.75];
    let mut expected = 12.0;
    for (idx, amount) in amounts.iter().enumerate() {
        let draft = if idx % 2 == 0 {
            expected += amount;
            TransactionDraft::income(a.clone(), *amount, "In", t0())
        } else {
            expected -= amount;
            TransactionDraft::expense(a.clone(), *amount, "Out", t0())
        };
        store.add_transaction(draft).unwrap();
        store
            .add_transaction(TransactionDraft::expense(other.clone(), 1.0, "Noise", t0()))
            .unwrap();
    }
    assert!((store.account(&a).unwrap().balance - expected).abs() < 1e-9);
    assert_eq!(store.account(&other).unwrap().balance, -6.0);
}

#[test]
fn transfer_preserves_combined_balance() {
    let (mut store, _) = ledger();
    let from = store.add_account("From", "💵", 300.0).id;
    let to = store.add_account("To", "🏦", 45.0).id;
    let before = store.total_balance();
    let txn = store
        .transfer_between_accounts(&from, &to, 120.0, "Move", t0())
        .unwrap();
    assert_eq!(txn.kind, TransactionKind::Transfer);
    assert_eq!(txn.to_account_id.as_ref(), Some(&to));
    assert_eq!(store.account(&from).unwrap().balance, 180.0);
    assert_eq!(store.account(&to).unwrap().balance, 165.0);
    assert_eq!(store.total_balance(), before);
}

#[test]
fn add_then_delete_restores_previous_state() {
    let (mut store, clock) = ledger();
    let a = store.add_account("A", "💵", 80.0).id;
    let txn = store
        .add_transaction(TransactionDraft::expense(a.clone(), 25.0, "Taxi", t0()))
        .unwrap();
    clock.advance(Duration::hours(11) + Duration::minutes(59) + Duration::seconds(59));
    assert_eq!(store.delete_transaction(&txn.id), EditOutcome::Applied);
    assert_eq!(store.account(&a).unwrap().balance, 80.0);
    assert!(store.transaction(&txn.id).is_none());
}

#[test]
fn delete_after_thirteen_hours_is_declined() {
    let (mut store, clock) = ledger();
    let a = store.add_account("A", "💵", 0.0).id;
    let txn = store
        .add_transaction(TransactionDraft::income(a.clone(), 10.0, "Refund", t0()))
        .unwrap();
    clock.set(t0() + Duration::hours(13));
    assert!(!store.delete_transaction(&txn.id).applied());
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.account(&a).unwrap().balance, 10.0);
}

#[test]
fn can_edit_boundaries_around_twelve_hours() {
    let (mut store, _) = ledger();
    let a = store.add_account("A", "💵", 0.0).id;
    let txn = store
        .add_transaction(TransactionDraft::income(a, 10.0, "Refund", t0()))
        .unwrap();
    let twelve = Duration::hours(12);
    assert!(store.can_edit_at(&txn.id, t0() + twelve - Duration::seconds(1)));
    assert!(!store.can_edit_at(&txn.id, t0() + twelve));
    assert!(!store.can_edit_at(&txn.id, t0() + twelve + Duration::seconds(1)));
}

#[test]
fn unknown_ids_are_declined_without_mutation() {
    let (mut store, _) = ledger();
    let a = store.add_account("A", "💵", 5.0).id;
    store
        .add_transaction(TransactionDraft::income(a.clone(), 1.0, "Coin", t0()))
        .unwrap();
    let ghost = TransactionId::from("ghost");
    let snapshot = store.transactions().to_vec();
    assert_eq!(
        store
            .update_transaction(&ghost, TransactionPatch::default().amount(99.0))
            .unwrap(),
        EditOutcome::NotFound
    );
    assert_eq!(store.delete_transaction(&ghost), EditOutcome::NotFound);
    assert!(!store.can_edit(&ghost));
    assert_eq!(store.transactions(), snapshot.as_slice());
    assert_eq!(store.account(&a).unwrap().balance, 6.0);
}

#[test]
fn converting_expense_into_transfer_moves_money_between_accounts() {
    let (mut store, _) = ledger();
    let a = store.add_account("A", "💵", 100.0).id;
    let b = store.add_account("B", "🏦", 0.0).id;
    let txn = store
        .add_transaction(
            TransactionDraft::expense(a.clone(), 40.0, "Misc", t0()).with_category(Category::Shopping),
        )
        .unwrap();
    store
        .update_transaction(
            &txn.id,
            TransactionPatch::default()
                .kind(TransactionKind::Transfer)
                .to_account(b.clone()),
        )
        .unwrap();
    let stored = store.transaction(&txn.id).unwrap();
    assert_eq!(stored.category, Category::Other);
    assert_eq!(store.account(&a).unwrap().balance, 60.0);
    assert_eq!(store.account(&b).unwrap().balance, 40.0);
}

#[test]
fn views_recompute_from_current_snapshot() {
    let (mut store, clock) = ledger();
    let a: AccountId = store.add_account("A", "💵", 0.0).id;
    store
        .add_transaction(TransactionDraft::income(a.clone(), 10.0, "One", t0()))
        .unwrap();
    let first =
        ChartService::income_vs_expense(store.transactions(), TimePeriod::Daily, clock.now());
    store
        .add_transaction(TransactionDraft::income(a, 5.0, "Two", t0()))
        .unwrap();
    let second =
        ChartService::income_vs_expense(store.transactions(), TimePeriod::Daily, clock.now());
    assert_eq!(first.last().unwrap().income, 10.0);
    assert_eq!(second.last().unwrap().income, 15.0);
}
