use crate::error::ApiError;
use anyhow::Context;
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/v2/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_VAR: &str = "ETHERSCAN_API_KEY";

/// Etherscan API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: ApiKey,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ApiError::MissingCredential(API_KEY_VAR))?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = env::var("ETHERSCAN_BASE_URL") {
            Url::parse(&base_url).context("ETHERSCAN_BASE_URL must be a valid URL")?;
            config.base_url = base_url;
        }

        if let Ok(secs) = env::var("ETHERSCAN_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .context("ETHERSCAN_TIMEOUT_SECS must be a whole number of seconds")?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
