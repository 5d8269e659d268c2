mod common;

use common::{date, expense, income, memory_ledger};
use tally_core::{FilterService, SummaryService, TrendService};
use tally_domain::{Category, FilterCriteria, Period};

#[test]
fn monthly_breakdown_splits_ties_by_declaration_order() {
    // Three expenses this month: Food 20, Transport 30, Food 10, plus one
    // income of 100. Balance is 40; Food and Transport tie at 30 each.
    let mut ledger = memory_ledger();
    let today = date(2024, 3, 14);
    ledger
        .add(expense(20.0, "groceries", Category::Food, date(2024, 3, 3)))
        .expect("add");
    ledger
        .add(expense(30.0, "fuel", Category::Transport, date(2024, 3, 5)))
        .expect("add");
    ledger
        .add(expense(10.0, "lunch", Category::Food, date(2024, 3, 9)))
        .expect("add");
    ledger
        .add(income(100.0, "salary", date(2024, 3, 1)))
        .expect("add");

    assert_eq!(ledger.balance(), 40.0);

    let summary = SummaryService::breakdown(ledger.snapshot(), Period::Month, today);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].category, Category::Food);
    assert_eq!(summary[0].amount, 30.0);
    assert_eq!(summary[0].percentage, 50.0);
    assert_eq!(summary[1].category, Category::Transport);
    assert_eq!(summary[1].amount, 30.0);
    assert_eq!(summary[1].percentage, 50.0);
}

#[test]
fn trend_expense_total_matches_breakdown_total() {
    let mut ledger = memory_ledger();
    let today = date(2024, 3, 14);
    ledger
        .add(expense(12.5, "coffee", Category::Food, date(2024, 3, 2)))
        .expect("add");
    ledger
        .add(expense(40.0, "electricity", Category::Utilities, date(2024, 3, 2)))
        .expect("add");
    ledger
        .add(expense(7.5, "bus", Category::Transport, date(2024, 3, 11)))
        .expect("add");
    ledger
        .add(income(200.0, "refund", date(2024, 3, 4)))
        .expect("add");

    for period in [Period::Week, Period::Month, Period::Year] {
        let bucketed: f64 = TrendService::buckets(ledger.snapshot(), period, today)
            .iter()
            .map(|bucket| bucket.expense_total)
            .sum();
        let summarized = SummaryService::total_expenses(ledger.snapshot(), period, today);
        assert!(
            (bucketed - summarized).abs() < 1e-9,
            "{period}: {bucketed} != {summarized}"
        );
    }
}

#[test]
fn neutral_filter_returns_full_snapshot_in_order() {
    let mut ledger = memory_ledger();
    ledger
        .add(expense(5.0, "old", Category::Other, date(2023, 11, 20)))
        .expect("add");
    ledger
        .add(income(50.0, "recent", date(2024, 3, 10)))
        .expect("add");

    let filtered = FilterService::apply(
        ledger.snapshot(),
        &FilterCriteria::default(),
        date(2024, 3, 14),
    );
    assert_eq!(filtered.len(), ledger.transaction_count());
    for (filtered_txn, snapshot_txn) in filtered.iter().zip(ledger.snapshot()) {
        assert_eq!(filtered_txn.id, snapshot_txn.id);
    }
}

#[test]
fn filtered_list_preserves_date_descending_order() {
    let mut ledger = memory_ledger();
    ledger
        .add(expense(1.0, "rent march", Category::Utilities, date(2024, 3, 1)))
        .expect("add");
    ledger
        .add(expense(1.0, "rent february", Category::Utilities, date(2024, 2, 1)))
        .expect("add");
    ledger
        .add(expense(1.0, "groceries", Category::Food, date(2024, 3, 8)))
        .expect("add");

    let criteria = FilterCriteria::default().with_search("rent");
    let filtered = FilterService::apply(ledger.snapshot(), &criteria, date(2024, 3, 14));
    let names: Vec<&str> = filtered.iter().map(|txn| txn.description.as_str()).collect();
    assert_eq!(names, vec!["rent march", "rent february"]);
}

#[test]
fn week_reports_ignore_earlier_activity() {
    // Reference Thursday 2024-03-14; the ISO week began Monday the 11th.
    let mut ledger = memory_ledger();
    let today = date(2024, 3, 14);
    ledger
        .add(expense(9.0, "inside week", Category::Food, date(2024, 3, 12)))
        .expect("add");
    ledger
        .add(expense(100.0, "last week", Category::Food, date(2024, 3, 8)))
        .expect("add");

    let buckets = TrendService::buckets(ledger.snapshot(), Period::Week, today);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].bucket, date(2024, 3, 12));
    assert_eq!(buckets[0].expense_total, 9.0);

    let summary = SummaryService::breakdown(ledger.snapshot(), Period::Week, today);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].amount, 9.0);
    assert_eq!(summary[0].percentage, 100.0);
}
