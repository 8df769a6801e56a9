//! Board configuration loader
//!
//! Reads the dashboard's `config.yaml` (feed endpoint, cadence and the two
//! symbol lists). Every loaded file is validated before it is returned, so
//! the poller never starts with an anchor outside the grid or a timeout
//! that outlasts the poll period.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{AppError, Result};

use super::types::AppConfig;

/// Parse and validate YAML; `origin` names the source in parse errors
fn parse_config(yaml_content: &str, origin: Option<&Path>) -> Result<AppConfig> {
    let config: AppConfig = serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = match origin {
            Some(path) => format!("YAML parse error in '{}': {}", path.display(), e),
            None => format!("YAML parse error: {}", e),
        };
        AppError::Config(message)
    })?;

    config.validate()?;
    Ok(config)
}

/// Load the board configuration from `path`
///
/// A missing file is a `Config` error, an unreadable one an `Io` error.
/// Omitted keys take the built-in defaults (`FeedConfig::default`,
/// `SymbolConfig::default`).
///
/// # Example
/// ```ignore
/// use std::path::Path;
/// use crypto_wall::config::load_config;
///
/// let config = load_config(Path::new("config.yaml"))?;
/// println!("anchor: {}", config.symbols.anchor);
/// ```
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let yaml_content = fs::read_to_string(path)?;
    let config = parse_config(&yaml_content, Some(path))?;
    info!(
        path = %path.display(),
        anchor = %config.symbols.anchor,
        tracked = config.symbols.primary.len() + config.symbols.secondary.len(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Board configuration from an in-memory YAML document
pub fn load_config_from_str(yaml_content: &str) -> Result<AppConfig> {
    parse_config(yaml_content, None)
}

/// Load `path` if it exists, otherwise fall back to the built-in board
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        return load_config(path);
    }

    info!(
        path = %path.display(),
        "No configuration file, using built-in defaults"
    );
    let config = AppConfig::default();
    config.validate()?;
    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_CONFIG_YAML: &str = r#"
feed:
  endpoint: https://api.binance.com/api/v3/ticker/24hr
  poll_interval_secs: 10
  request_timeout_secs: 8
symbols:
  anchor: BTCUSDT
  primary: [BTCUSDT, ETHUSDT, SOLUSDT]
  secondary: [DOGEUSDT, LINKUSDT]
"#;

    #[test]
    fn test_load_config_from_str_valid() {
        let config = load_config_from_str(VALID_CONFIG_YAML).unwrap();
        assert_eq!(config.symbols.primary.len(), 3);
        assert_eq!(config.symbols.secondary, vec!["DOGEUSDT", "LINKUSDT"]);
        assert_eq!(config.feed.poll_interval_secs, 10);
    }

    #[test]
    fn test_load_config_from_str_invalid_yaml() {
        let result = load_config_from_str("invalid: yaml: content: [");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    fn test_load_config_from_str_validation_failure() {
        let overlapping = r#"
feed:
  endpoint: https://api.binance.com/api/v3/ticker/24hr
  poll_interval_secs: 10
  request_timeout_secs: 8
symbols:
  anchor: BTCUSDT
  primary: [BTCUSDT, ETHUSDT]
  secondary: [ETHUSDT]
"#;
        let result = load_config_from_str(overlapping);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("both primary and secondary"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_load_config_from_file_valid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(VALID_CONFIG_YAML.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.symbols.anchor, "BTCUSDT");
    }

    #[test]
    fn test_load_config_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path());
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_load_config_from_file_invalid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"invalid: [yaml: content").unwrap();
        temp_file.flush().unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("YAML parse error"));
    }

    #[test]
    #[serial(env)]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default(Path::new("/nonexistent/crypto_wall.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config_or_default_reports_bad_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"feed:\n  poll_interval_secs: 5\n  request_timeout_secs: 5\n")
            .unwrap();
        temp_file.flush().unwrap();

        let result = load_config_or_default(temp_file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must be < poll_interval_secs"));
    }
}
