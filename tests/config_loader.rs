use navtree::config::{Config, ConfigError};
use navtree::navigator::Navigator;
use navtree::screen::{IdStrategy, Screen};
use navtree::tree::ActivePath;

mod common;

use common::{root_id, Page};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.navigator.id_strategy, IdStrategy::Sequential);
    assert!(!config.navigator.treat_sheet_dismiss_as_appear_in_presenter);
    assert_eq!(config.navigator.history_limit, 64);
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("navtree/config.toml"));
}

/// A missing file is not an error: defaults apply.
#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.navigator, Config::default().navigator);
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[navigator]
id_strategy = "random"
treat_sheet_dismiss_as_appear_in_presenter = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.navigator.id_strategy, IdStrategy::Random);
    assert!(config.navigator.treat_sheet_dismiss_as_appear_in_presenter);
    assert_eq!(config.navigator.history_limit, 64);
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[navigator\nid_strategy = ").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_load_unknown_strategy_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[navigator]\nid_strategy = \"shuffled\"\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_fails_zero_history_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[navigator]\nhistory_limit = 0\n").unwrap();

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("history_limit"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_blank_filter() {
    let mut config = Config::default();
    config.logging.filter = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_history_limit_caps_navigation_log() {
    let mut config = Config::default();
    config.navigator.history_limit = 2;
    let navigator = Navigator::with_config(ActivePath::screens([Page::Home.erase()]), &config.navigator);
    let home = root_id(&navigator);

    for n in 0..5 {
        navigator.go_to(Page::Detail(n), home).unwrap();
    }

    assert_eq!(navigator.history().len(), 2);
}

#[test]
fn test_random_strategy_mints_uuid_ids() {
    let mut config = Config::default();
    config.navigator.id_strategy = IdStrategy::Random;
    let navigator = Navigator::with_config(ActivePath::screens([Page::Home.erase()]), &config.navigator);

    // v4 UUIDs carry version bits above the low 64, so they print as UUIDs.
    let id = root_id(&navigator);
    assert!(id.as_u128() > u64::MAX as u128);
    assert_eq!(id.to_string().len(), 36);
}
