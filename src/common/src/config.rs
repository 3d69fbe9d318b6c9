use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::error::CommonError;
use crate::error::Result;

pub const DEFAULT_ENDPOINT: &str = "https://api.upbound.io/";
pub const DEFAULT_USER_AGENT: &str = concat!("cloud-sdk/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const ENV_PREFIX: &str = "CLOUD_SDK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Api {
    pub endpoint: Url,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    pub level: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: Api,
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: Api {
                endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
                token: None,
                user_agent: DEFAULT_USER_AGENT.to_string(),
                timeout: DEFAULT_TIMEOUT,
            },
            log: Log {
                level: LevelFilter::INFO,
            },
        }
    }
}

/// Appends a trailing slash so that joining a relative API path extends the
/// endpoint path instead of replacing its last segment.
pub fn normalize_endpoint(mut endpoint: Url) -> Url {
    if !endpoint.path().ends_with('/') {
        let path = format!("{}/", endpoint.path());
        endpoint.set_path(&path);
    }

    endpoint
}

// File and environment representation. Durations and levels stay strings until
// converted into `Config`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawApi {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub user_agent: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawLog {
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawConfig {
    pub api: RawApi,
    pub log: RawLog,
}

impl TryInto<Config> for RawConfig {
    type Error = CommonError;

    fn try_into(self) -> std::result::Result<Config, Self::Error> {
        let default = Config::default();

        let endpoint = match self.api.endpoint {
            None => default.api.endpoint,
            Some(endpoint) => normalize_endpoint(Url::parse(endpoint.as_str())?),
        };
        let timeout = match self.api.timeout {
            None => default.api.timeout,
            Some(timeout) => humantime::parse_duration(timeout.as_str())?,
        };
        let level = match self.log.level {
            None => default.log.level,
            Some(level) => LevelFilter::from_str(level.as_str())
                .map_err(|_| CommonError::InvalidLogLevel(level))?,
        };

        Ok(Config {
            api: Api {
                endpoint,
                token: self.api.token.filter(|token| !token.is_empty()),
                user_agent: self.api.user_agent.unwrap_or(default.api.user_agent),
                timeout,
            },
            log: Log { level },
        })
    }
}

/// Loads configuration from an optional file overlaid with `CLOUD_SDK_*`
/// environment variables, e.g. `CLOUD_SDK_API__TOKEN`.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let raw: RawConfig = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()?;

    raw.try_into()
}
