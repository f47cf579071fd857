//! Tests for configuration loading.

use std::io::Write;
use std::time::Duration;

use aptos_arena::{ArenaConfig, TimingConfig, WALLET_ADDRESS_ENV};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = ArenaConfig::default();
    assert_eq!(*config.reward().amount_octas(), 100_000);
    assert_eq!(config.timing().opponent_delay(), Duration::from_millis(800));
    assert_eq!(config.timing().dice_roll(), Duration::from_millis(1500));
    assert_eq!(config.timing().rps_choosing(), Duration::from_millis(500));
    assert_eq!(config.timing().rps_reveal(), Duration::from_millis(2000));
    assert_eq!(config.timing().memory_flip_back(), Duration::from_millis(1000));
    assert_eq!(config.timing().carousel_slide(), Duration::from_millis(500));
    assert!(config.wallet_address().is_ok());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"
[reward]
amount_octas = 5000

[timing]
opponent_delay_ms = 10
"#,
    );
    let config = ArenaConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.reward().amount_octas(), 5000);
    assert_eq!(*config.timing().opponent_delay_ms(), 10);
    assert_eq!(*config.timing().dice_roll_ms(), 1500);
    assert_eq!(config.logging(), ArenaConfig::default().logging());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ArenaConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ArenaConfig::default());
}

#[test]
fn test_invalid_files_are_errors() {
    let file = write_config("[reward\namount_octas = 1");
    let err = ArenaConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));

    let file = write_config("[wallet]\naddress = \"not-an-address\"");
    let err = ArenaConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Invalid wallet address"));

    let file = write_config("[reward]\namount_octas = 0");
    assert!(ArenaConfig::from_file(file.path()).is_err());
}

#[test]
fn test_env_override_replaces_wallet_address() {
    let config = ArenaConfig::default()
        .with_env_overrides(|key| (key == WALLET_ADDRESS_ENV).then(|| "0xBEEF".to_string()))
        .unwrap();
    assert_eq!(config.wallet_address().unwrap().as_str(), "0xbeef");

    let err = ArenaConfig::default()
        .with_env_overrides(|_| Some("beef".to_string()))
        .unwrap_err();
    assert!(err.message.contains("Invalid wallet address"));
}

#[test]
fn test_uninstalled_wallet_from_config() {
    let file = write_config("[wallet]\ninstalled = false");
    let config = ArenaConfig::from_file(file.path()).unwrap();
    assert!(!*config.wallet().installed());
    assert!(config.dev_wallet().is_ok());
}

#[test]
fn test_setters_build_config() {
    let config = ArenaConfig::default().with_timing(TimingConfig::instant());
    assert_eq!(config.timing().opponent_delay(), Duration::ZERO);
    assert_eq!(config.reward_issuer().amount_octas(), &100_000);
}
