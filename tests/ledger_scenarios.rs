mod common;

use chrono::{Duration, NaiveDate};
use pocketbook::domain::{
    AccountId, Category, Division, TimePeriod, TransactionDraft, TransactionPatch,
};
use pocketbook::ledger::{
    ChartService, CoreError, EditOutcome, EditWindow, SummaryService, TransactionFilter,
    ValidationError,
};

use common::{sample_now, seeded_store};

fn ids<'a>(list: impl IntoIterator<Item = &'a pocketbook::domain::Transaction>) -> Vec<&'a str> {
    list.into_iter().map(|txn| txn.id.as_str()).collect()
}

#[test]
fn sample_period_totals_follow_the_calendar() {
    let (store, _) = seeded_store();
    let txns = store.transactions();

    let month = SummaryService::period_totals(txns, TimePeriod::Monthly, sample_now());
    assert_eq!(month.income, 65000.0);
    assert_eq!(month.expense, 24800.0);
    assert_eq!(month.balance, 40200.0);

    let week = SummaryService::period_totals(txns, TimePeriod::Weekly, sample_now());
    assert_eq!(week.income, 15000.0);
    assert_eq!(week.expense, 12800.0);

    let day = SummaryService::period_totals(txns, TimePeriod::Daily, sample_now());
    assert_eq!(day.income, 0.0);
    assert_eq!(day.expense, 3000.0);
}

#[test]
fn filter_combines_criteria_newest_first() {
    let (store, _) = seeded_store();
    let office = TransactionFilter::new().division(Division::Office);
    assert_eq!(ids(office.apply(store.transactions())), ["3", "1"]);

    let feb_first = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let first_day = TransactionFilter::new().from_date(feb_first).to_date(feb_first);
    assert_eq!(ids(first_day.apply(store.transactions())), ["7", "1"]);

    let food = TransactionFilter::new().category(Category::Food);
    assert_eq!(ids(food.apply(store.transactions())), ["2"]);
}

#[test]
fn transfers_stay_out_of_views_but_move_balances() {
    let (mut store, _) = seeded_store();
    let before = SummaryService::period_totals(store.transactions(), TimePeriod::Monthly, sample_now());
    let bank = AccountId::from("bank");
    let cash = AccountId::from("cash");

    store
        .transfer_between_accounts(&bank, &cash, 4000.0, "ATM", sample_now())
        .unwrap();

    let after = SummaryService::period_totals(store.transactions(), TimePeriod::Monthly, sample_now());
    assert_eq!(before, after);
    assert_eq!(store.account(&cash).unwrap().balance, 3500.0);
    assert_eq!(store.account(&bank).unwrap().balance, 53200.0);
    let daily = ChartService::income_vs_expense(store.transactions(), TimePeriod::Daily, sample_now());
    assert_eq!(daily.last().unwrap().expense, 3000.0);
}

#[test]
fn custom_edit_window_governs_updates_and_deletes() {
    let (store, clock) = seeded_store();
    let mut store = store.with_edit_window(EditWindow::from_hours(1));
    let wallet = AccountId::from("wallet");

    let txn = store
        .add_transaction(TransactionDraft::expense(wallet.clone(), 300.0, "Books", sample_now()))
        .unwrap();
    clock.advance(Duration::minutes(59));
    assert_eq!(
        store
            .update_transaction(&txn.id, TransactionPatch::default().category(Category::Education))
            .unwrap(),
        EditOutcome::Applied
    );

    clock.advance(Duration::minutes(1));
    assert_eq!(store.delete_transaction(&txn.id), EditOutcome::WindowExpired);
    assert_eq!(store.account(&wallet).unwrap().balance, 16500.0 - 300.0);
}

#[test]
fn rejected_patch_leaves_transaction_unchanged() {
    let (mut store, _) = seeded_store();
    let cash = AccountId::from("cash");
    let txn = store
        .add_transaction(TransactionDraft::income(cash.clone(), 40.0, "Refund", sample_now()))
        .unwrap();

    let err = store
        .update_transaction(&txn.id, TransactionPatch::default().amount(-1.0))
        .unwrap_err();
    assert_eq!(err, CoreError::Validation(ValidationError::InvalidAmount));
    assert_eq!(store.transaction(&txn.id).unwrap().amount, 40.0);
    assert_eq!(store.account(&cash).unwrap().balance, -500.0 + 40.0);
}

#[test]
fn init_can_be_called_repeatedly() {
    pocketbook::init();
    pocketbook::init();
}
