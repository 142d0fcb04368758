//! Configuration management with TOML and environment overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Server configuration with layered loading.
///
/// Scrape timeout and redirect limits are deliberately not configurable;
/// they live as constants next to the HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address to bind the listener on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for Config {
    fn default() -> Self {
        Self { bind: default_bind(), port: default_port() }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("cartscan").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(p) = port.parse() {
                self.port = p;
            }
        }

        if let Ok(bind) = std::env::var("CARTSCAN_BIND") {
            self.bind = bind;
        }

        self
    }

    /// Returns the socket address string to bind on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.listen_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            bind = "127.0.0.1"
            port = 8080
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_config_from_toml_partial() {
        let config: Config = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            bind = "::1"
            port = 4000
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.bind, "::1");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let result = Config::from_file(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port = 5000").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_config_with_env() {
        let orig_port = std::env::var("PORT").ok();
        let orig_bind = std::env::var("CARTSCAN_BIND").ok();

        std::env::set_var("PORT", "7070");
        std::env::set_var("CARTSCAN_BIND", "127.0.0.1");

        let config = Config::new().with_env();
        assert_eq!(config.port, 7070);
        assert_eq!(config.bind, "127.0.0.1");

        match orig_port {
            Some(v) => std::env::set_var("PORT", v),
            None => std::env::remove_var("PORT"),
        }
        match orig_bind {
            Some(v) => std::env::set_var("CARTSCAN_BIND", v),
            None => std::env::remove_var("CARTSCAN_BIND"),
        }
    }

    #[test]
    fn test_config_with_env_invalid_port() {
        let orig_port = std::env::var("PORT").ok();

        std::env::set_var("PORT", "not_a_number");

        let config = Config::new().with_env();
        // Invalid value is ignored, keeping the default
        assert_eq!(config.port, 3001);

        match orig_port {
            Some(v) => std::env::set_var("PORT", v),
            None => std::env::remove_var("PORT"),
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config { bind: "10.0.0.1".to_string(), port: 1234 };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.bind, config.bind);
        assert_eq!(parsed.port, config.port);
    }
}
