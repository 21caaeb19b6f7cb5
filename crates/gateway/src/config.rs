//! Gateway configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GATEWAY_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `CONEKTA_PRIVATE_KEY` - Conekta private API key (server-side only)
//!
//! ## Optional
//! - `CONEKTA_API_URL` - API base URL (default: <https://api.conekta.io>)
//! - `CONEKTA_API_VERSION` - API version for the Accept header (default: 2.0.0)

use secrecy::SecretString;
use thiserror::Error;

/// Default Conekta API base URL.
const DEFAULT_API_URL: &str = "https://api.conekta.io";

/// Default Conekta API version, sent in the Accept header.
const DEFAULT_API_VERSION: &str = "2.0.0";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Gateway application configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// Conekta API configuration
    pub conekta: ConektaConfig,
}

/// Conekta API configuration.
///
/// Implements `Debug` manually to redact the private key.
#[derive(Clone)]
pub struct ConektaConfig {
    /// API base URL
    pub api_url: String,
    /// API version sent in the Accept header (e.g. 2.0.0)
    pub api_version: String,
    /// Private API key (server-side only)
    pub private_key: SecretString,
}

impl std::fmt::Debug for ConektaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConektaConfig")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or if the
    /// private key fails placeholder validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("GATEWAY_DATABASE_URL")?;
        let conekta = ConektaConfig::from_env()?;

        Ok(Self {
            database_url,
            conekta,
        })
    }
}

impl ConektaConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: get_env_or_default("CONEKTA_API_URL", DEFAULT_API_URL),
            api_version: get_env_or_default("CONEKTA_API_VERSION", DEFAULT_API_VERSION),
            private_key: get_validated_secret("CONEKTA_PRIVATE_KEY")?,
        })
    }

    /// The Accept header value for the configured API version.
    #[must_use]
    pub fn accept_header(&self) -> String {
        format!("application/vnd.conekta-v{}+json", self.api_version)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a secret is not a placeholder.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-api-key-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_changeme() {
        let result = validate_secret_strength("changeme123", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_valid_key() {
        let result = validate_secret_strength("key_eYvWV7gSDkNYQsmrTddhL4nG", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_accept_header() {
        let config = ConektaConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_version: "2.0.0".to_string(),
            private_key: SecretString::from("key_eYvWV7gSDkNYQsmrTddhL4nG"),
        };
        assert_eq!(config.accept_header(), "application/vnd.conekta-v2.0.0+json");
    }

    #[test]
    fn test_conekta_config_debug_redacts_private_key() {
        let config = ConektaConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_version: "2.0.0".to_string(),
            private_key: SecretString::from("key_eYvWV7gSDkNYQsmrTddhL4nG"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("https://api.conekta.io"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("key_eYvWV7gSDkNYQsmrTddhL4nG"));
    }
}
