use staffdir::config::Config;
use staffdir::constants::{DEFAULT_DATABASE_URL, DEFAULT_LIST_LIMIT, DEFAULT_MAX_CONNECTIONS};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty database URL should fail
    config.database.url.clear();
    assert!(config.validate().is_err());

    // Reset and test a zero-sized pool
    config.database.url = DEFAULT_DATABASE_URL.to_string();
    config.database.max_connections = 0;
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.database.max_connections = DEFAULT_MAX_CONNECTIONS;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("url = \"sqlite:staffdir.db?mode=rwc\""));
    assert!(toml_str.contains("max_connections = 4"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[database]
max_connections = 8

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.database.max_connections, 8);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL); // default value
    assert_eq!(config.logging.level, "info"); // default value
}

#[test]
fn test_list_limit_is_one_hundred() {
    // The unpaginated listing cap is part of the service contract
    assert_eq!(DEFAULT_LIST_LIMIT, 100);
}
