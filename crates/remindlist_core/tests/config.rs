use remindlist_core::config::{ENV_COMPLETED_TIE_BREAK, ENV_LOG_DIR, ENV_LOG_LEVEL};
use remindlist_core::{default_log_level, CompletedTieBreak, ConfigError, CoreConfig};
use std::collections::HashMap;
use std::path::PathBuf;

fn resolve(vars: &[(&str, &str)]) -> Result<CoreConfig, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    CoreConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    let config = resolve(&[]).unwrap();
    assert_eq!(config, CoreConfig::default());
    assert_eq!(config.log_level, default_log_level());
    assert_eq!(config.log_dir, None);
    assert_eq!(config.completed_tie_break, CompletedTieBreak::CreationOrder);
}

#[test]
fn values_are_normalized() {
    let config = resolve(&[
        (ENV_LOG_LEVEL, " Warning "),
        (ENV_LOG_DIR, "/var/log/remindlist"),
        (ENV_COMPLETED_TIE_BREAK, "COMPLETION"),
    ])
    .unwrap();

    assert_eq!(config.log_level, "warn");
    assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/remindlist")));
    assert_eq!(
        config.store_config().completed_tie_break,
        CompletedTieBreak::CompletionOrder
    );
}

#[test]
fn blank_values_are_treated_as_unset() {
    let config = resolve(&[(ENV_LOG_DIR, "   "), (ENV_LOG_LEVEL, "")]).unwrap();
    assert_eq!(config, CoreConfig::default());
}

#[test]
fn invalid_values_are_reported() {
    assert_eq!(
        resolve(&[(ENV_LOG_LEVEL, "loud")]).unwrap_err(),
        ConfigError::InvalidLogLevel("loud".to_string())
    );
    assert_eq!(
        resolve(&[(ENV_LOG_DIR, "logs")]).unwrap_err(),
        ConfigError::RelativeLogDir("logs".to_string())
    );
    let err = resolve(&[(ENV_COMPLETED_TIE_BREAK, "due")]).unwrap_err();
    assert!(err.to_string().contains(ENV_COMPLETED_TIE_BREAK));
}
