//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup (after `dotenvy::dotenv()`) and
//! validated before the server starts. Command-line flags of the server binary (`--http-port`,
//! `--config`) override the corresponding variables.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `REDIRECTS_FILE` - Path of the JSON redirects file (default: `redirects.json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CORRUPT_FILE_POLICY` - `reset` to start empty when the redirects file
//!   cannot be parsed, `fail` to refuse to start (default: `reset`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::domain::registry::CorruptFilePolicy;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub redirects_file: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// Behavior when the redirects file exists but is not valid JSON.
    pub corrupt_file_policy: CorruptFilePolicy,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CORRUPT_FILE_POLICY` holds an unknown value.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let redirects_file = env::var("REDIRECTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("redirects.json"));
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let corrupt_file_policy = match env::var("CORRUPT_FILE_POLICY") {
            Ok(v) => v
                .parse()
                .map_err(|e: String| anyhow::anyhow!("Invalid CORRUPT_FILE_POLICY: {}", e))?,
            Err(_) => CorruptFilePolicy::default(),
        };

        Ok(Self {
            listen_addr,
            redirects_file,
            log_level,
            log_format,
            corrupt_file_policy,
        })
    }

    /// Binds to all interfaces on `port`, as the `--http-port` flag does.
    pub fn with_http_port(mut self, port: u16) -> Self {
        self.listen_addr = format!("0.0.0.0:{}", port);
        self
    }

    /// Uses `path` as the redirects file, as the `--config` flag does.
    pub fn with_redirects_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.redirects_file = path.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `redirects_file` is empty or names a directory
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.redirects_file.as_os_str().is_empty() {
            anyhow::bail!("REDIRECTS_FILE must not be empty");
        }

        if self.redirects_file.is_dir() {
            anyhow::bail!(
                "REDIRECTS_FILE must be a file, got directory '{}'",
                self.redirects_file.display()
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Redirects file: {}", self.redirects_file.display());
        tracing::info!("  Corrupt file policy: {:?}", self.corrupt_file_policy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8080".to_string(),
            redirects_file: PathBuf::from("redirects.json"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            corrupt_file_policy: CorruptFilePolicy::Reset,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.redirects_file = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_redirects_file_directory_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config().with_redirects_file(dir.path());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_flag_overrides() {
        let config = test_config()
            .with_http_port(9090)
            .with_redirects_file("/var/lib/golinks/redirects.json");

        assert_eq!(config.listen_addr, "0.0.0.0:9090");
        assert_eq!(
            config.redirects_file,
            PathBuf::from("/var/lib/golinks/redirects.json")
        );
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("REDIRECTS_FILE");
            env::remove_var("LOG_FORMAT");
            env::remove_var("CORRUPT_FILE_POLICY");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.redirects_file, PathBuf::from("redirects.json"));
        assert_eq!(config.log_format, "text");
        assert_eq!(config.corrupt_file_policy, CorruptFilePolicy::Reset);
    }

    #[test]
    #[serial]
    fn test_from_env_values() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:3000");
            env::set_var("REDIRECTS_FILE", "/tmp/links.json");
            env::set_var("CORRUPT_FILE_POLICY", "fail");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.redirects_file, PathBuf::from("/tmp/links.json"));
        assert_eq!(config.corrupt_file_policy, CorruptFilePolicy::Fail);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("REDIRECTS_FILE");
            env::remove_var("CORRUPT_FILE_POLICY");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_policy() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CORRUPT_FILE_POLICY", "ignore");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("CORRUPT_FILE_POLICY");
        }
    }
}
