use crate::error::{Error, Result};
use std::{env, sync::OnceLock};
use tracing::warn;
use url::Url;

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Backend used when `LARK_RELAY_BASE_URL` is unset (local development).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const BASE_URL_ENV: &str = "LARK_RELAY_BASE_URL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the workflow backend; endpoint paths are appended to it.
    pub base_url: Url,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A malformed `LARK_RELAY_BASE_URL` is logged and ignored in favor of
    /// the default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .and_then(|raw| match Url::parse(raw.trim()) {
                Ok(url) => Some(url),
                Err(err) => {
                    warn!(%err, %raw, "ignoring malformed {BASE_URL_ENV}");
                    None
                }
            })
            .unwrap_or_else(default_base_url);
        Self { base_url }
    }

    /// Replace the base URL (CLI flag override). Unlike the env path, a
    /// malformed value here is a hard error: the user asked for it explicitly.
    ///
    /// # Errors
    ///
    /// Returns `Error::Other` if `raw` is not a parseable URL.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self> {
        self.base_url = Url::parse(raw.trim())
            .map_err(|err| Error::other(format!("invalid base url {raw:?}: {err}")))?;
        Ok(self)
    }

    /// Initialize the global config (call once at startup).
    ///
    /// # Errors
    ///
    /// Returns error if config is already initialized.
    pub fn init(self) -> Result<()> {
        GLOBAL_CONFIG
            .set(self)
            .map_err(|_| Error::other("config already initialized"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Get global config (initialized by `Config::init(self)`).
#[must_use]
pub fn global_config() -> Config {
    GLOBAL_CONFIG.get().cloned().unwrap_or_default()
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}
