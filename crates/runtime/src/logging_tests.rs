use super::*;
use log::{Level, Metadata, Record};
use serial_test::serial;

#[test]
#[serial]
fn get_level_from_env_parses_cases() {
    let cases: &[(Option<&str>, Level)] = &[
        (None, Level::Warn),
        (Some("debug"), Level::Debug),
        (Some("DEBUG"), Level::Debug),
        (Some("info"), Level::Info),
        (Some("warn"), Level::Warn),
        (Some("error"), Level::Error),
        (Some("trace"), Level::Trace),
        (Some("garbage"), Level::Warn),
        (Some("off"), Level::Warn),
    ];

    for (value, expected) in cases {
        match value {
            Some(v) => unsafe { std::env::set_var(PROGRAM_LOG_LEVEL, v) },
            None => unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) },
        }

        let lvl = get_level_from_env();
        assert_eq!(
            lvl, *expected,
            "env {:?} should yield level {:?}, got {:?}",
            value, expected, lvl
        );
    }

    unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) };
}

#[test]
fn enabled_respects_level_threshold() {
    let levels = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for logger_level in levels {
        let logger = Logger::new(logger_level);

        for record_level in levels {
            let meta = Metadata::builder()
                .level(record_level)
                .target("lsl_fs::collector")
                .build();

            assert_eq!(
                logger.enabled(&meta),
                record_level <= logger_level,
                "logger level {:?}, record level {:?}",
                logger_level,
                record_level
            );
        }
    }
}

#[test]
fn format_line_contains_level_target_and_message() {
    let line = format_line(
        &Record::builder()
            .level(Level::Warn)
            .target("lsl_fs::collector")
            .args(format_args!("skipping entry {}", "x"))
            .build(),
    );

    assert!(
        line.ends_with("WARN [lsl_fs::collector] skipping entry x"),
        "unexpected log line: {line}"
    );
}

#[test]
fn init_twice_is_harmless() {
    init_with_level(Level::Error).expect("first init");
    init_with_level(Level::Trace).expect("second init is a no-op");
}
