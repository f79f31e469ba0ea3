//! Facade configuration and the engine configuration derived from it

use crate::error::{Error, Result};
use ::config::builder::DefaultState;
use ::config::{Config as ConfigLoader, ConfigBuilder, Environment, File, FileFormat};
use elinker_utils::io::get_extension;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Prefix for environment variable overrides (`ELINKER_ENDPOINT`, ...)
pub const ENV_PREFIX: &str = "ELINKER";

/// Facade configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the engine service
    pub endpoint: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Credential forwarded to the engine
    #[serde(default)]
    pub api_key: Option<String>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Engine-specific settings, passed through untouched
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Create a config for an engine endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
            user_agent: None,
            settings: BTreeMap::new(),
        }
    }

    /// Load a config from a JSON or YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let builder = ConfigLoader::builder().add_source(file_source(path.as_ref())?);
        finish(builder)
    }

    /// Load a config from a file, then layer `ELINKER_*` environment variables on top
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Config::load`], reading variables from `env` instead of the process
    /// environment when given
    pub fn load_with_env(path: impl AsRef<Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let builder = ConfigLoader::builder()
            .add_source(file_source(path.as_ref())?)
            .add_source(environment(env));
        finish(builder)
    }

    /// Apply `ELINKER_*` environment variable overrides
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides_from(None)
    }

    /// Apply overrides from `env` (full variable names), or from the process
    /// environment when `None`
    pub fn apply_overrides_from(mut self, env: Option<HashMap<String, String>>) -> Result<Self> {
        let overrides: Overrides = ConfigLoader::builder()
            .add_source(environment(env))
            .build()?
            .try_deserialize()?;

        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(api_key) = overrides.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(user_agent) = overrides.user_agent {
            self.user_agent = Some(user_agent);
        }
        self.settings.extend(overrides.settings);

        self.validate()?;
        Ok(self)
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add an engine-specific setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Configuration("endpoint must not be empty".to_string()));
        }
        Ok(())
    }

    /// Derive the engine-specific configuration
    pub fn engine_config(&self) -> Result<EngineConfig> {
        self.validate()?;
        let endpoint = Url::parse(self.endpoint.trim())?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "endpoint cannot be used as a base URL: {}",
                endpoint
            )));
        }

        Ok(EngineConfig {
            endpoint,
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            api_key: self.api_key.clone(),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| format!("elinker/{}", env!("CARGO_PKG_VERSION"))),
            settings: self.settings.clone(),
        })
    }
}

/// Fields settable from the environment
#[derive(Debug, Default, Deserialize)]
struct Overrides {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    api_key: Option<String>,
    user_agent: Option<String>,
    #[serde(default)]
    settings: BTreeMap<String, String>,
}

/// `ELINKER_TIMEOUT_SECS` sets `timeout_secs`; `ELINKER_SETTINGS__<KEY>` sets a setting.
/// Values stay strings until deserialized so keys like `007` survive intact.
fn environment(env: Option<HashMap<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .source(env)
}

fn file_source(path: &Path) -> Result<File<::config::FileSourceFile, FileFormat>> {
    let format = match get_extension(path).as_deref() {
        Some("json") => FileFormat::Json,
        Some("yaml") | Some("yml") => FileFormat::Yaml,
        other => {
            return Err(Error::Configuration(format!(
                "unsupported config format {:?} for {}",
                other.unwrap_or(""),
                path.display()
            )))
        }
    };
    Ok(File::from(path).format(format).required(true))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config> {
    let config: Config = builder.build()?.try_deserialize()?;
    tracing::debug!(endpoint = %config.endpoint, "Loaded configuration");
    config.validate()?;
    Ok(config)
}

/// Engine-specific view of a [`Config`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Base URL of the engine service
    pub endpoint: Url,

    /// Request timeout, if any
    pub timeout: Option<Duration>,

    /// Credential forwarded to the engine
    pub api_key: Option<String>,

    /// User agent sent with each request
    pub user_agent: String,

    /// Engine-specific settings
    pub settings: BTreeMap<String, String>,
}
