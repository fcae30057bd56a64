use std::fs;
use tracing::{debug, error, info};

use crate::types::client_config::{AppConfig, ConfigError};

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    info!("Loading configuration from: {}", path);

    let contents = fs::read_to_string(path)?;
    debug!("Processing file: {}", path);

    if contents.trim().is_empty() {
        error!("Configuration file is empty");
        return Err(ConfigError::InvalidConfig("empty file".into()));
    }

    let config: AppConfig = toml::from_str(&contents)?;

    info!("Configuration loaded successfully");
    debug!("Config: {:?}", config);

    validate_config(&config)?;

    info!("Config validated");

    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.api.base_url.is_empty() {
        return Err(ConfigError::InvalidConfig(
            "api.base_url cannot be empty".into(),
        ));
    }

    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        return Err(ConfigError::InvalidConfig(
            "api.base_url must start with http:// or https://".into(),
        ));
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::InvalidConfig(
            "api.timeout_secs must be greater than 0".into(),
        ));
    }

    if config.storage.token_path.is_empty() {
        return Err(ConfigError::InvalidConfig(
            "storage.token_path cannot be empty".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> AppConfig {
        toml::from_str(toml_str).expect("test config must parse")
    }

    #[test]
    fn empty_toml_produces_full_defaults() {
        let config = parse("");
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.storage.token_path, ".roombook/token");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = parse("[api]\nbase_url = \"https://rooms.example.com/api\"\n");
        assert_eq!(config.api.base_url, "https://rooms.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = parse("[api]\nbase_url = \"\"\n");
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config = parse("[api]\nbase_url = \"ftp://rooms.example.com\"\n");
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = parse("[api]\ntimeout_secs = 0\n");
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_token_path_is_rejected() {
        let config = parse("[storage]\ntoken_path = \"\"\n");
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfig(_))
        ));
    }
}
