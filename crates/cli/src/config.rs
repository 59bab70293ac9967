//! Environment configuration for the CLI.

use std::env;
use std::path::PathBuf;

pub const STORE_PATH_VAR: &str = "LOOPLAB_STORE_PATH";
pub const DEFAULT_MARKET_VAR: &str = "LOOPLAB_DEFAULT_MARKET";

pub const DEFAULT_STORE_PATH: &str = "looplab-snapshot.json";
pub const DEFAULT_MARKET: &str = "eth-aave-usdc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// JSON file holding saved strategies and points models.
    pub store_path: PathBuf,
    /// Market used when a command omits `--market`.
    pub default_market: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            default_market: DEFAULT_MARKET.to_string(),
        }
    }
}

impl CliConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Call after `dotenv()` so values from `.env` are visible.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            store_path: non_empty(STORE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            default_market: non_empty(DEFAULT_MARKET_VAR).unwrap_or(defaults.default_market),
        }
    }

    pub fn with_store_path(mut self, path: PathBuf) -> Self {
        self.store_path = path;
        self
    }
}
