use rtimediff::core::command::SessionCommand;
use rtimediff::errors::AppError;
use rtimediff::export::ExportFormat;
use rtimediff::models::{ClockTime, Meridiem};
use rtimediff::utils::time::parse_clock_list;

#[test]
fn test_construction_rejects_out_of_range() {
    assert!(matches!(
        ClockTime::new(0, 10, Meridiem::Am),
        Err(AppError::InvalidHour(0))
    ));
    assert!(matches!(
        ClockTime::new(13, 10, Meridiem::Pm),
        Err(AppError::InvalidHour(13))
    ));
    assert!(matches!(
        ClockTime::new(5, 60, Meridiem::Pm),
        Err(AppError::InvalidMinute(60))
    ));
    assert!(ClockTime::new(12, 59, Meridiem::Pm).is_ok());
}

#[test]
fn test_parse_twelve_hour_variants() {
    for input in ["5:52 PM", "05:52PM", "5:52 pm", " 5:52 p.m. ", "05:52 P M"] {
        let c = ClockTime::parse(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        assert_eq!(c.display(), "05:52 PM", "{input}");
    }
    assert_eq!(ClockTime::parse("12:00 am").unwrap().hour_24(), 0);
}

#[test]
fn test_parse_twenty_four_hour() {
    assert_eq!(ClockTime::parse("17:52").unwrap().display(), "05:52 PM");
    assert_eq!(ClockTime::parse("00:05").unwrap().display(), "12:05 AM");
    assert_eq!(ClockTime::parse("12:30").unwrap().display(), "12:30 PM");
    assert!(matches!(
        ClockTime::parse("24:00"),
        Err(AppError::InvalidHour(24))
    ));
}

#[test]
fn test_parse_rejects_garbage() {
    for input in ["", "5", "5:5 PM", "ab:cd", "5:52 XM", "13:00 PM", "0:30 AM"] {
        assert!(ClockTime::parse(input).is_err(), "{input}");
    }
}

#[test]
fn test_parse_reports_bad_meridiem() {
    assert!(matches!(
        ClockTime::parse("5:52 XM"),
        Err(AppError::InvalidMeridiem(m)) if m == "XM"
    ));
    assert!(matches!(
        ClockTime::parse("5:52 pmx"),
        Err(AppError::InvalidMeridiem(_))
    ));
    assert_eq!(ClockTime::parse("5:52 a").unwrap().display(), "05:52 AM");
}

#[test]
fn test_from_str() {
    let c: ClockTime = "7:00 pm".parse().unwrap();
    assert_eq!(c.display(), "07:00 PM");
    assert!(matches!(
        "7:99 pm".parse::<ClockTime>(),
        Err(AppError::InvalidMinute(99))
    ));
}

#[test]
fn test_clock_list_joins_lone_meridiem() {
    let args: Vec<String> = ["5:52", "PM", "7:00pm", "19:30"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let list = parse_clock_list(&args).unwrap();
    let shown: Vec<_> = list.iter().map(|c| c.display()).collect();
    assert_eq!(shown, ["05:52 PM", "07:00 PM", "07:30 PM"]);
}

#[test]
fn test_session_command_parsing() {
    let pm = ClockTime::parse("5:52 PM").unwrap();

    assert_eq!(SessionCommand::parse("add 5:52 PM").unwrap(), SessionCommand::Add(pm));
    assert_eq!(SessionCommand::parse("5:52 PM").unwrap(), SessionCommand::Add(pm));
    assert_eq!(SessionCommand::parse("START 5:52pm").unwrap(), SessionCommand::Start(pm));
    assert_eq!(SessionCommand::parse("undo").unwrap(), SessionCommand::RemoveLast);
    assert_eq!(SessionCommand::parse("remove-last").unwrap(), SessionCommand::RemoveLast);
    assert_eq!(SessionCommand::parse("clear").unwrap(), SessionCommand::Clear);
    assert_eq!(SessionCommand::parse("list").unwrap(), SessionCommand::Report);
    assert_eq!(SessionCommand::parse("  ").unwrap(), SessionCommand::Nothing);
    assert_eq!(SessionCommand::parse("exit").unwrap(), SessionCommand::Quit);
}

#[test]
fn test_session_export_arguments() {
    assert_eq!(
        SessionCommand::parse("export").unwrap(),
        SessionCommand::Export {
            format: None,
            file: None
        }
    );
    assert_eq!(
        SessionCommand::parse("export CSV out.csv").unwrap(),
        SessionCommand::Export {
            format: Some(ExportFormat::Csv),
            file: Some("out.csv".to_string())
        }
    );
    assert_eq!(
        SessionCommand::parse("export my report.pdf").unwrap(),
        SessionCommand::Export {
            format: None,
            file: Some("my report.pdf".to_string())
        }
    );
}

#[test]
fn test_session_errors() {
    assert!(matches!(
        SessionCommand::parse("frobnicate"),
        Err(AppError::UnknownCommand(_))
    ));
    assert!(matches!(
        SessionCommand::parse("add"),
        Err(AppError::InvalidTime(_))
    ));
    assert!(SessionCommand::parse("add 25:00").is_err());
}
