//! Tests for loading simulation config files.

use std::io::Write;
use strictly_ludo::PlayerId;
use strictly_ludo_sim::{SimConfig, Strategy};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
seed = 12
max_turns = 500
strategies = ["eager"]
record_events = true

[board]
players = 2
track_length = 40
home_size = 4
"#
    )
    .unwrap();

    let config = SimConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.seed(), Some(12));
    assert_eq!(*config.max_turns(), 500);
    assert_eq!(config.board().players(), 2);
    assert!(*config.record_events());
    assert_eq!(config.strategy_for(PlayerId::new(1)), Strategy::Eager);
    assert_eq!(config.strategy_for(PlayerId::new(2)), Strategy::Random);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_turns = \"lots\"").unwrap();
    let err = SimConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse"));
}

#[test]
fn test_zero_turn_cap_rejected() {
    let err = SimConfig::from_toml("max_turns = 0").unwrap_err();
    assert!(err.message.contains("max_turns"));
}
