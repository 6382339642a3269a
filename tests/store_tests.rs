use chrono::NaiveDate;
use jobtracker::core::{ApplicationFilter, ApplicationStore};
use jobtracker::errors::AppError;
use jobtracker::models::{ApplicationRecord, NewApplication};
use jobtracker::table::MemoryTable;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

fn rec(company: &str, status: &str, follow_up: Option<&str>) -> ApplicationRecord {
    ApplicationRecord {
        date: d("2024-01-10"),
        company: company.to_string(),
        role: "Engineer".to_string(),
        method: "portal".to_string(),
        contact: String::new(),
        status: status.to_string(),
        follow_up: follow_up.map(d),
        notes: String::new(),
    }
}

fn store_with(records: Vec<ApplicationRecord>) -> ApplicationStore<MemoryTable> {
    ApplicationStore::new(MemoryTable::with_records(records))
}

fn companies(store: &ApplicationStore<MemoryTable>) -> Vec<String> {
    store
        .list_all()
        .expect("list")
        .into_iter()
        .map(|r| r.record.company)
        .collect()
}

#[test]
fn add_normalizes_fields() {
    let mut store = store_with(vec![]);
    let today = d("2024-06-15");

    let input = NewApplication {
        date: "".into(),
        company: "  Acme ".into(),
        role: "Dev\t".into(),
        method: " email".into(),
        contact: "".into(),
        status: " Ghosted ".into(),
        follow_up: "2024-13-40".into(),
        notes: " call back  ".into(),
    };

    let added = store.add_as_of(&input, today).expect("add");
    let listed = store.list_all().expect("list");
    let last = listed.last().expect("one record");

    assert_eq!(last.index, 1);
    assert_eq!(last.record, added);
    assert_eq!(added.date, today);
    assert_eq!(added.company, "Acme");
    assert_eq!(added.role, "Dev");
    assert_eq!(added.method, "email");
    // free-text status, stored verbatim apart from trimming
    assert_eq!(added.status, "Ghosted");
    assert_eq!(added.follow_up, None);
    assert_eq!(added.notes, "call back");
}

#[test]
fn add_keeps_valid_dates_and_substitutes_garbage() {
    let mut store = store_with(vec![]);
    let today = d("2024-06-15");

    let ok = NewApplication {
        date: "2024-02-29".into(),
        follow_up: " 2024-03-07 ".into(),
        ..Default::default()
    };
    let bad = NewApplication {
        date: "29/02/2024".into(),
        ..Default::default()
    };

    let first = store.add_as_of(&ok, today).expect("add");
    let second = store.add_as_of(&bad, today).expect("add");

    assert_eq!(first.date, d("2024-02-29"));
    assert_eq!(first.follow_up, Some(d("2024-03-07")));
    assert_eq!(second.date, today);
    assert_eq!(second.follow_up_str(), "");
}

#[test]
fn add_appends_and_persists_each_time() {
    let mut store = store_with(vec![rec("First", "Applied", None)]);

    store
        .add(&NewApplication {
            company: "Second".into(),
            ..Default::default()
        })
        .expect("add");

    assert_eq!(companies(&store), vec!["First", "Second"]);
    assert_eq!(store.backend().save_count(), 1);
}

#[test]
fn delete_removes_and_shifts_indices() {
    let mut store = store_with(vec![
        rec("A", "Applied", None),
        rec("B", "Applied", None),
        rec("C", "Applied", None),
        rec("D", "Applied", None),
    ]);

    let removed = store.delete(2).expect("delete");
    assert_eq!(removed.company, "B");

    let listed = store.list_all().expect("list");
    assert_eq!(listed.len(), 3);
    let pairs: Vec<(usize, &str)> = listed
        .iter()
        .map(|r| (r.index, r.record.company.as_str()))
        .collect();
    assert_eq!(pairs, vec![(1, "A"), (2, "C"), (3, "D")]);
}

#[test]
fn delete_out_of_range_leaves_store_untouched() {
    let mut store = store_with(vec![rec("A", "Applied", None), rec("B", "Offer", None)]);

    for bad in [0, 3, 100] {
        match store.delete(bad) {
            Err(AppError::IndexOutOfRange { index, count }) => {
                assert_eq!(index, bad);
                assert_eq!(count, 2);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    assert_eq!(companies(&store), vec!["A", "B"]);
    assert_eq!(store.backend().save_count(), 0);
}

#[test]
fn delete_on_empty_store_is_out_of_range() {
    let mut store = store_with(vec![]);
    assert!(matches!(
        store.delete(1),
        Err(AppError::IndexOutOfRange { index: 1, count: 0 })
    ));
}

#[test]
fn get_returns_current_position() {
    let store = store_with(vec![rec("A", "Applied", None), rec("B", "Offer", None)]);

    let got = store.get(2).expect("get");
    assert_eq!(got.index, 2);
    assert_eq!(got.record.company, "B");
    assert!(store.get(0).is_err());
    assert!(store.get(3).is_err());
}

#[test]
fn pending_follow_ups_inclusive_and_ordered() {
    let store = store_with(vec![
        rec("Late", "Applied", Some("2024-01-02")),
        rec("Blank", "Applied", None),
        rec("Boundary", "Interview", Some("2024-01-01")),
        rec("Old", "Applied", Some("2023-12-01")),
    ]);

    let due = store.pending_follow_ups(d("2024-01-01")).expect("pending");
    let got: Vec<(usize, &str)> = due
        .iter()
        .map(|r| (r.index, r.record.company.as_str()))
        .collect();

    assert_eq!(got, vec![(3, "Boundary"), (4, "Old")]);
}

#[test]
fn stats_on_empty_store_is_an_error() {
    let store = store_with(vec![]);
    assert!(matches!(
        store.stats(d("2024-01-01")),
        Err(AppError::EmptyStore)
    ));
}

#[test]
fn stats_scenario() {
    let store = store_with(vec![
        rec("A", "Applied", Some("2024-01-01")),
        rec("B", "Applied", None),
        rec("C", "Interview", Some("2024-03-01")),
        rec("D", "Offer", None),
    ]);

    let report = store.stats(d("2024-02-01")).expect("stats");

    assert_eq!(report.total, 4);
    assert_eq!(
        report.status_counts,
        vec![
            ("Applied".to_string(), 2),
            ("Interview".to_string(), 1),
            ("Offer".to_string(), 1),
        ]
    );
    assert_eq!(report.status_percentage("Applied"), 50.0);
    assert_eq!(report.conversion_rate("Interview"), 25.0);
    assert_eq!(report.conversion_rate("Offer"), 25.0);
    assert_eq!(report.interview_rate(), 25.0);
    assert_eq!(report.offer_rate(), 25.0);
    assert_eq!(report.conversion_rate("Rejected"), 0.0);
    assert_eq!(report.pending_follow_up_count, 1);
}

#[test]
fn stats_ties_keep_first_appearance_order() {
    let store = store_with(vec![
        rec("A", "Rejected", None),
        rec("B", "Interview", None),
        rec("C", "Interview", None),
        rec("D", "Rejected", None),
        rec("E", "Offer", None),
        rec("F", "Case Study", None),
    ]);

    let report = store.stats(d("2024-01-01")).expect("stats");
    let order: Vec<&str> = report
        .status_counts
        .iter()
        .map(|(s, _)| s.as_str())
        .collect();

    assert_eq!(order, vec!["Rejected", "Interview", "Offer", "Case Study"]);
}

#[test]
fn stats_percentages_have_one_decimal() {
    let store = store_with(vec![
        rec("A", "Applied", None),
        rec("B", "Interview", None),
        rec("C", "Interview", None),
    ]);

    let report = store.stats(d("2024-01-01")).expect("stats");
    assert_eq!(report.status_percentage("Applied"), 33.3);
    assert_eq!(report.status_percentage("Interview"), 66.7);
}

#[test]
fn filter_by_company_and_status() {
    let store = store_with(vec![
        rec("Acme Corp", "Applied", None),
        rec("Globex", "Interview", None),
        rec("acme labs", "Interview", None),
    ]);

    let by_company = store
        .filter(&ApplicationFilter::new(Some("ACME"), None))
        .expect("filter");
    let idx: Vec<usize> = by_company.iter().map(|r| r.index).collect();
    assert_eq!(idx, vec![1, 3]);

    let both = store
        .filter(&ApplicationFilter::new(Some("acme"), Some("Interview")))
        .expect("filter");
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].record.company, "acme labs");

    // status matching is exact
    let none = store
        .filter(&ApplicationFilter::new(None, Some("interview")))
        .expect("filter");
    assert!(none.is_empty());

    // blank filters match everything
    let all = store
        .filter(&ApplicationFilter::new(Some("  "), Some("")))
        .expect("filter");
    assert_eq!(all.len(), 3);
}
