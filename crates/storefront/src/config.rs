//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_DIR` - Directory for the file-backed store (default: .cart)
//! - `CART_STORAGE_KEY` - Key the cart is saved under (default: cart)
//! - `CART_CURRENCY_SYMBOL` - Symbol prefixed to displayed amounts (default: R)
//! - `CART_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;

use thiserror::Error;

use crate::cart::DEFAULT_CART_KEY;
use crate::storage::{FileStore, validate_key};

const DEFAULT_STORAGE_DIR: &str = ".cart";
const DEFAULT_CURRENCY_SYMBOL: &str = "R";
const MAX_CURRENCY_SYMBOL_CHARS: usize = 4;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Cart application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory the file-backed store writes into
    pub storage_dir: PathBuf,
    /// Key the cart is saved under
    pub storage_key: String,
    /// Currency symbol for display
    pub currency_symbol: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: DEFAULT_CART_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage_dir = PathBuf::from(get_or_default("CART_STORAGE_DIR", DEFAULT_STORAGE_DIR));
        if storage_dir.as_os_str().is_empty() {
            return Err(invalid("CART_STORAGE_DIR", "must not be empty"));
        }

        let storage_key = get_or_default("CART_STORAGE_KEY", DEFAULT_CART_KEY);
        validate_key(&storage_key).map_err(|e| invalid("CART_STORAGE_KEY", &e.to_string()))?;

        let currency_symbol = get_or_default("CART_CURRENCY_SYMBOL", DEFAULT_CURRENCY_SYMBOL);
        validate_currency_symbol(&currency_symbol)?;

        let log_format = match get_or_default("CART_LOG_FORMAT", "pretty")
            .to_ascii_lowercase()
            .as_str()
        {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(invalid(
                    "CART_LOG_FORMAT",
                    &format!("expected 'pretty' or 'json', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            storage_dir,
            storage_key,
            currency_symbol,
            log_format,
        })
    }

    /// File-backed store rooted at the configured directory.
    #[must_use]
    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.storage_dir)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.to_string())
}

/// Currency symbols are short and printable (e.g. `R`, `$`, `USD `).
fn validate_currency_symbol(symbol: &str) -> Result<(), ConfigError> {
    let chars = symbol.chars().count();
    if chars > MAX_CURRENCY_SYMBOL_CHARS {
        return Err(invalid(
            "CART_CURRENCY_SYMBOL",
            &format!("must be at most {MAX_CURRENCY_SYMBOL_CHARS} characters (got {chars})"),
        ));
    }
    if symbol.chars().any(char::is_control) {
        return Err(invalid(
            "CART_CURRENCY_SYMBOL",
            "must not contain control characters",
        ));
    }
    Ok(())
}
