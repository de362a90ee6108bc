use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rtd, setup_test_config, temp_dir};

#[test]
fn test_session_add_and_report() {
    let dir = temp_dir("session_add_report");
    let conf = setup_test_config(&dir);

    rtd()
        .args(["--config", &conf, "session", "--start", "06:15 AM"])
        .write_stdin("add 05:52 PM\n7:00 PM\nreport\nquit\n")
        .assert()
        .success()
        .stdout(contains("Added 05:52 PM"))
        .stdout(contains("2 times added"))
        .stdout(contains("11 hours 37 minutes"))
        .stdout(contains("12 hours 45 minutes"))
        .stdout(contains("24 hours 22 minutes"));
}

#[test]
fn test_session_empty_report_shows_prompt() {
    let dir = temp_dir("session_empty");
    let conf = setup_test_config(&dir);

    rtd()
        .args(["--config", &conf, "session"])
        .write_stdin("report\nexport\n")
        .assert()
        .success()
        .stdout(contains("Add times above to see and download your report."))
        .stdout(contains("Total (sum").not());

    assert!(!dir.join("time_difference_report.pdf").exists());
}

#[test]
fn test_session_undo_twice_is_noop() {
    let dir = temp_dir("session_undo");
    let conf = setup_test_config(&dir);

    rtd()
        .args(["--config", &conf, "session"])
        .write_stdin("add 05:52 PM\nundo\nundo\nreport\n")
        .assert()
        .success()
        .stdout(contains("Removed 05:52 PM"))
        .stdout(contains("Nothing to remove."))
        .stdout(contains("0 times added"))
        .stdout(contains("Add times above"));
}

#[test]
fn test_session_clear_and_change_start() {
    let dir = temp_dir("session_clear");
    let conf = setup_test_config(&dir);

    rtd()
        .args(["--config", &conf, "session"])
        .write_stdin("add 1:00 PM\nadd 2:00 PM\nclear\nstart 5:00 PM\nadd 05:52 PM\nlist\n")
        .assert()
        .success()
        .stdout(contains("All times cleared."))
        .stdout(contains("Start time set to 05:00 PM"))
        .stdout(contains("0 hours 52 minutes"))
        .stdout(contains("00:52"));
}

#[test]
fn test_session_invalid_input_keeps_going() {
    let dir = temp_dir("session_invalid");
    let conf = setup_test_config(&dir);

    rtd()
        .args(["--config", &conf, "session"])
        .write_stdin("add 13:00 PM\nfoo\nadd 05:52 AM\nreport\n")
        .assert()
        .success()
        .stderr(contains("Invalid hour: 13"))
        .stderr(contains("Unknown session command: foo"))
        .stdout(contains("23 hours 37 minutes"));
}

#[test]
fn test_session_export_csv() {
    let dir = temp_dir("session_export");
    let conf = setup_test_config(&dir);

    rtd()
        .args(["--config", &conf, "session"])
        .write_stdin("add 05:52 PM\nexport csv shift.csv\nexit\n")
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(dir.join("shift.csv")).expect("csv written");
    assert!(content.contains("05:52 PM,11 hours 37 minutes,11:37"));
}

#[test]
fn test_session_export_file_extension_picks_format() {
    let dir = temp_dir("session_export_ext");
    let conf = setup_test_config(&dir);

    rtd()
        .args(["--config", &conf, "session"])
        .write_stdin("add 05:52 PM\nexport shift.csv\nexport html shift.json\n")
        .assert()
        .success()
        .stdout(contains("CSV export completed"))
        .stderr(contains("Export format not supported"));

    let content = fs::read_to_string(dir.join("shift.csv")).expect("csv written");
    assert!(!content.starts_with("%PDF"));
    assert!(content.contains("05:52 PM,11 hours 37 minutes,11:37"));
    assert!(!dir.join("shift.json").exists());
}
