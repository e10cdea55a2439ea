//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Key rate limits by forwarded headers (default: `false`)
//! - `RATE_LIMIT_ENABLED` - Enable per-IP rate limiting (default: `false`)
//! - `RATE_LIMIT_REPLENISH_SECONDS` - Seconds to regain one request slot (default: 1)
//! - `RATE_LIMIT_BURST` - Requests a client may send at once (default: 100)
//! - `LOTTO_SEED` - Seed for reproducible lotto draws (default: unset, OS entropy)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8000"
//! export LOG_FORMAT="json"
//! export LOTTO_SEED="42"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub rate_limit_enabled: bool,
    pub rate_limit_replenish_seconds: u64,
    pub rate_limit_burst: u32,
    /// Seed for the lotto number source. `None` draws from OS entropy.
    pub lotto_seed: Option<u64>,
}

/// Per-client rate limit settings handed to the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub replenish_seconds: u64,
    pub burst: u32,
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable is set but cannot be
    /// parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = parse_flag("BEHIND_PROXY")?.unwrap_or(false);
        let rate_limit_enabled = parse_flag("RATE_LIMIT_ENABLED")?.unwrap_or(false);
        let rate_limit_replenish_seconds = parse_var("RATE_LIMIT_REPLENISH_SECONDS")?.unwrap_or(1);
        let rate_limit_burst = parse_var("RATE_LIMIT_BURST")?.unwrap_or(100);
        let lotto_seed = parse_var("LOTTO_SEED")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            rate_limit_enabled,
            rate_limit_replenish_seconds,
            rate_limit_burst,
            lotto_seed,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - rate limiting is enabled with a zero interval or burst
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

        if self.rate_limit_enabled {
            if self.rate_limit_replenish_seconds == 0 {
                anyhow::bail!("RATE_LIMIT_REPLENISH_SECONDS must be greater than 0");
            }
            if self.rate_limit_burst == 0 {
                anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
            }
        }

        Ok(())
    }

    /// Rate limit settings, or `None` when rate limiting is disabled.
    pub fn rate_limit(&self) -> Option<RateLimitConfig> {
        self.rate_limit_enabled.then(|| RateLimitConfig {
            replenish_seconds: self.rate_limit_replenish_seconds,
            burst: self.rate_limit_burst,
            behind_proxy: self.behind_proxy,
        })
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.rate_limit_enabled {
            tracing::info!(
                "  Rate limit: burst {}, 1 request per {}s{}",
                self.rate_limit_burst,
                self.rate_limit_replenish_seconds,
                if self.behind_proxy { " (behind proxy)" } else { "" }
            );
        } else {
            tracing::info!("  Rate limit: disabled");
        }

        match self.lotto_seed {
            Some(seed) => tracing::info!("  Lotto source: seeded ({})", seed),
            None => tracing::info!("  Lotto source: OS entropy"),
        }
    }
}

/// Parses an optional variable, failing if it is set but malformed.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: '{}'", name, value)),
        Err(_) => Ok(None),
    }
}

/// Parses an optional boolean flag (`true`/`false`/`1`/`0`, case-insensitive).
fn parse_flag(name: &str) -> Result<Option<bool>> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            _ => anyhow::bail!("{} must be 'true' or 'false', got '{}'", name, value),
        },
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "LOG_FORMAT",
        "BEHIND_PROXY",
        "RATE_LIMIT_ENABLED",
        "RATE_LIMIT_REPLENISH_SECONDS",
        "RATE_LIMIT_BURST",
        "LOTTO_SEED",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn test_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            rate_limit_enabled: true,
            rate_limit_replenish_seconds: 1,
            rate_limit_burst: 100,
            lotto_seed: None,
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

        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8000".to_string();
        config.rate_limit_burst = 0;
        assert!(config.validate().is_err());

        // Zero limits are irrelevant once rate limiting is off
        config.rate_limit_enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rate_limit_settings() {
        let mut config = test_config();
        config.behind_proxy = true;

        assert_eq!(
            config.rate_limit(),
            Some(RateLimitConfig {
                replenish_seconds: 1,
                burst: 100,
                behind_proxy: true,
            })
        );

        config.rate_limit_enabled = false;
        assert_eq!(config.rate_limit(), None);
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.log_format, "text");
        assert!(!config.behind_proxy);
        assert!(!config.rate_limit_enabled);
        assert_eq!(config.rate_limit(), None);
        assert_eq!(config.rate_limit_replenish_seconds, 1);
        assert_eq!(config.rate_limit_burst, 100);
        assert_eq!(config.lotto_seed, None);
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("BEHIND_PROXY", "TRUE");
            env::set_var("RATE_LIMIT_ENABLED", "1");
            env::set_var("RATE_LIMIT_REPLENISH_SECONDS", "3");
            env::set_var("RATE_LIMIT_BURST", "5");
            env::set_var("LOTTO_SEED", "42");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert!(config.behind_proxy);
        assert!(config.rate_limit_enabled);
        assert_eq!(config.rate_limit_replenish_seconds, 3);
        assert_eq!(config.rate_limit_burst, 5);
        assert_eq!(config.lotto_seed, Some(42));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_malformed_values_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOTTO_SEED", "not-a-number");
        }
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("LOTTO_SEED"));

        clear_env();
        unsafe {
            env::set_var("BEHIND_PROXY", "maybe");
        }
        assert!(Config::from_env().is_err());

        clear_env();
    }
}
