//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::PathBuf;
use timetravel_tictactoe::MoveOrder;
use timetravel_tui::TuiConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TuiConfig::load(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.order(), &MoveOrder::Ascending);
    assert_eq!(config.log_file(), &PathBuf::from("timetravel.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = TuiConfig::from_file(file.path()).expect("empty config parses");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_all_fields() {
    let file = write_config(
        r#"
order = "descending"
log_file = "/tmp/ttt.log"
log_filter = "debug,timetravel_tictactoe=trace"
"#,
    );
    let config = TuiConfig::load(file.path()).expect("config parses");
    assert_eq!(config.order(), &MoveOrder::Descending);
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "debug,timetravel_tictactoe=trace");
}

#[test]
fn test_invalid_order_is_an_error() {
    let file = write_config(r#"order = "sideways""#);
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_cli_order_override() {
    let config = TuiConfig::default().with_order(MoveOrder::Descending);
    assert_eq!(config.order(), &MoveOrder::Descending);
}
