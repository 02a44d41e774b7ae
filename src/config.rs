//! Environment-driven configuration.
//!
//! Loaded once at startup (after `dotenvy` has populated the environment
//! from a `.env` file, when present). `GOOGLE_API_KEY` is the only
//! required variable; everything else has a sensible default.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const APP_NAME: &str = "DigiMeds";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "digimeds=info"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Key for both the Gemini API and the Identity Toolkit lookup.
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub identity_base_url: String,
    pub database_path: PathBuf,
    /// Whether `/scan` requires a verified identity (default: anonymous,
    /// matching the upstream design).
    pub scan_requires_auth: bool,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let google_api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("GOOGLE_API_KEY"))?;

        let bind_raw = var_or("DIGIMEDS_BIND_ADDR", "0.0.0.0:8000");
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidVar {
            var: "DIGIMEDS_BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let timeout_raw = var_or("DIGIMEDS_HTTP_TIMEOUT_SECS", "60");
        let http_timeout_secs = timeout_raw.parse().map_err(|_| ConfigError::InvalidVar {
            var: "DIGIMEDS_HTTP_TIMEOUT_SECS",
            value: timeout_raw.clone(),
        })?;

        let auth_raw = var_or("DIGIMEDS_SCAN_REQUIRES_AUTH", "false");
        let scan_requires_auth = parse_bool(&auth_raw).ok_or(ConfigError::InvalidVar {
            var: "DIGIMEDS_SCAN_REQUIRES_AUTH",
            value: auth_raw.clone(),
        })?;

        Ok(Self {
            bind_addr,
            google_api_key,
            gemini_model: var_or("DIGIMEDS_GEMINI_MODEL", "gemini-2.5-flash"),
            gemini_base_url: var_or(
                "DIGIMEDS_GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com",
            ),
            identity_base_url: var_or(
                "DIGIMEDS_IDENTITY_BASE_URL",
                "https://identitytoolkit.googleapis.com",
            ),
            database_path: PathBuf::from(var_or("DIGIMEDS_DB_PATH", "digimeds.db")),
            scan_requires_auth,
            http_timeout_secs,
        })
    }
}

fn var_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_digimeds() {
        assert_eq!(APP_NAME, "DigiMeds");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_scopes_to_crate() {
        assert!(default_log_filter().starts_with("digimeds"));
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
