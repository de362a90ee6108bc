use rtimediff::core::time_model::{Elapsed, elapsed, elapsed_between, resolve};
use rtimediff::models::{ClockTime, Meridiem};
use std::collections::HashSet;

fn t(hour: u32, minute: u32, meridiem: Meridiem) -> ClockTime {
    ClockTime::new(hour, minute, meridiem).expect("valid clock time")
}

fn all_clock_times() -> Vec<ClockTime> {
    let mut out = Vec::with_capacity(1440);
    for meridiem in [Meridiem::Am, Meridiem::Pm] {
        for hour in 1..=12 {
            for minute in 0..60 {
                out.push(t(hour, minute, meridiem));
            }
        }
    }
    out
}

#[test]
fn test_resolve_maps_twelve_to_zero() {
    assert_eq!(resolve(&t(12, 0, Meridiem::Am)).second_of_day(), 0);
    assert_eq!(resolve(&t(12, 0, Meridiem::Pm)).second_of_day(), 12 * 3600);
    assert_eq!(resolve(&t(12, 30, Meridiem::Am)).second_of_day(), 30 * 60);
    assert_eq!(resolve(&t(11, 59, Meridiem::Pm)).second_of_day(), 86_400 - 60);
    assert_eq!(resolve(&t(5, 52, Meridiem::Pm)).day(), 0);

    let rolled = resolve(&t(5, 52, Meridiem::Am)).next_day();
    assert_eq!(rolled.day(), 1);
    assert_eq!(rolled.second_of_day(), 5 * 3600 + 52 * 60);
}

#[test]
fn test_resolve_is_injective() {
    let instants: HashSet<_> = all_clock_times().iter().map(resolve).collect();
    assert_eq!(instants.len(), 1440);
}

#[test]
fn test_same_day_difference() {
    // 06:15 AM → 05:52 PM
    let d = elapsed_between(&t(6, 15, Meridiem::Am), &t(5, 52, Meridiem::Pm));
    assert_eq!(d.as_seconds(), 11 * 3600 + 37 * 60);
    assert_eq!(d.to_hhmm(), "11:37");
    assert_eq!(d.to_long(), "11 hours 37 minutes");
}

#[test]
fn test_rollover_to_next_day() {
    // 06:15 AM → 05:52 AM is read as the next morning
    let d = elapsed_between(&t(6, 15, Meridiem::Am), &t(5, 52, Meridiem::Am));
    assert_eq!(d.to_hhmm(), "23:37");
    assert_eq!(d.to_long(), "23 hours 37 minutes");
}

#[test]
fn test_midnight_to_noon() {
    let d = elapsed_between(&t(12, 0, Meridiem::Am), &t(12, 0, Meridiem::Pm));
    assert_eq!(d.as_seconds(), 12 * 3600);
    assert_eq!(d.to_long(), "12 hours 0 minutes");
}

#[test]
fn test_equal_times_give_zero() {
    for c in all_clock_times() {
        assert_eq!(elapsed_between(&c, &c), Elapsed::ZERO);
    }
}

#[test]
fn test_elapsed_is_never_negative_and_under_a_day() {
    let times = all_clock_times();
    // every start against a spread of targets
    for start in &times {
        for target in times.iter().step_by(7) {
            let d = elapsed(resolve(start), resolve(target));
            assert!(d.as_seconds() < 86_400, "{start} → {target}");
        }
    }
}

#[test]
fn test_one_minute_before_start_is_almost_a_day() {
    let d = elapsed_between(&t(9, 0, Meridiem::Am), &t(8, 59, Meridiem::Am));
    assert_eq!(d.to_hhmm(), "23:59");
}

#[test]
fn test_hhmm_is_padded_but_not_truncated() {
    assert_eq!(Elapsed::from_seconds(0).to_hhmm(), "00:00");
    assert_eq!(Elapsed::from_seconds(5 * 60).to_hhmm(), "00:05");
    assert_eq!(Elapsed::from_seconds(100 * 3600 + 5 * 60).to_hhmm(), "100:05");
    assert_eq!(
        Elapsed::from_seconds(100 * 3600 + 5 * 60).to_long(),
        "100 hours 5 minutes"
    );
}

#[test]
fn test_hhmm_parses_back_within_a_minute() {
    for secs in [0u64, 59, 60, 3599, 3600, 41_820, 87_720, 359_999, 1_000_001] {
        let d = Elapsed::from_seconds(secs);
        let s = d.to_hhmm();
        let (h, m) = s.split_once(':').expect("hh:mm");
        let back = h.parse::<u64>().unwrap() * 3600 + m.parse::<u64>().unwrap() * 60;
        assert!(back <= secs && secs - back <= 59, "{secs} → {s}");
    }
}

#[test]
fn test_elapsed_sum() {
    let parts = [
        Elapsed::from_seconds(41_820),
        Elapsed::from_seconds(45_900),
    ];
    let total: Elapsed = parts.iter().sum();
    assert_eq!(total.to_long(), "24 hours 22 minutes");
}
