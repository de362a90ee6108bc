use rtimediff::core::ledger::SessionLedger;
use rtimediff::core::report::compute_report;
use rtimediff::core::time_model::{Elapsed, elapsed_between};
use rtimediff::models::{ClockTime, Meridiem, TimeEntry};

fn t(s: &str) -> ClockTime {
    ClockTime::parse(s).expect("valid clock time")
}

fn start_0615() -> SessionLedger {
    SessionLedger::new(t("06:15 AM"))
}

#[test]
fn test_append_captures_display_and_keeps_order() {
    let mut ledger = start_0615();
    let first = ledger.append(t("5:52 pm")).clone();
    ledger.append(t("07:00 PM"));

    assert_eq!(first.display, "05:52 PM");
    assert_eq!(ledger.len(), 2);
    let displays: Vec<_> = ledger.entries().iter().map(|e| e.display.as_str()).collect();
    assert_eq!(displays, ["05:52 PM", "07:00 PM"]);
}

#[test]
fn test_report_rows_and_total() {
    let mut ledger = start_0615();
    ledger.append(t("05:52 PM"));
    ledger.append(t("07:00 PM"));

    let report = ledger.report().expect("non-empty ledger");
    let hhmm: Vec<_> = report.rows.iter().map(|r| r.elapsed.to_hhmm()).collect();
    assert_eq!(hhmm, ["11:37", "12:45"]);
    assert_eq!(report.total_display(), "24 hours 22 minutes");
    assert_eq!(report.start_display(), "06:15 AM");
    assert_eq!(
        report.table()[0],
        vec!["05:52 PM", "11 hours 37 minutes", "11:37"]
    );
}

#[test]
fn test_empty_ledger_has_no_report() {
    let ledger = start_0615();
    assert!(ledger.is_empty());
    assert!(ledger.report().is_none());
}

#[test]
fn test_remove_last_on_empty_is_noop() {
    let mut ledger = start_0615();
    ledger.append(t("05:52 PM"));

    assert_eq!(ledger.remove_last().map(|e| e.display), Some("05:52 PM".to_string()));
    assert!(ledger.remove_last().is_none());
    assert!(ledger.is_empty());
}

#[test]
fn test_clear_on_empty_and_full() {
    let mut ledger = start_0615();
    ledger.clear();
    assert!(ledger.is_empty());

    ledger.append(t("1:00 PM"));
    ledger.append(t("2:00 PM"));
    ledger.clear();
    assert!(ledger.is_empty());
    assert!(ledger.report().is_none());
}

#[test]
fn test_changing_start_recomputes_rows() {
    let mut ledger = start_0615();
    ledger.append(t("05:52 PM"));
    ledger.set_start(t("05:00 PM"));

    let report = ledger.report().expect("non-empty ledger");
    assert_eq!(report.rows[0].elapsed.to_hhmm(), "00:52");
}

#[test]
fn test_total_is_sum_not_span_and_ignores_order() {
    let start = t("06:15 AM");
    let times = ["05:52 AM", "11:00 PM", "06:15 AM", "12:00 PM", "05:52 AM"];

    let entries: Vec<TimeEntry> = times.iter().map(|s| TimeEntry::new(t(s))).collect();
    let mut reversed = entries.clone();
    reversed.reverse();

    let expected: Elapsed = times.iter().map(|s| elapsed_between(&start, &t(s))).sum();

    let report = compute_report(&start, &entries);
    let report_rev = compute_report(&start, &reversed);

    assert_eq!(report.total, expected);
    assert_eq!(report_rev.total, expected);
    // duplicates count twice, rows follow insertion order
    assert_eq!(report.rows.len(), 5);
    assert_eq!(report.rows[0].entry.display, "05:52 AM");
    assert_eq!(report_rev.rows[0].entry.display, "05:52 AM");
    assert_eq!(report.rows[1].entry.display, "11:00 PM");
    assert_eq!(report_rev.rows[1].entry.display, "12:00 PM");
    // total may exceed a day
    assert!(report.total.hours() > 24);
}

#[test]
fn test_append_then_undo_twice() {
    let mut ledger = SessionLedger::new(ClockTime::new(6, 15, Meridiem::Am).unwrap());
    ledger.append(ClockTime::new(5, 52, Meridiem::Pm).unwrap());
    ledger.remove_last();
    ledger.remove_last();
    assert_eq!(ledger.len(), 0);
}
