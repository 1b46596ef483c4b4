// Runtime settings read from the environment.
//
// Responsibilities
// - Apply defaults for every unset variable.
// - Reject capacities that are not positive integers.
// - Fall back to the default port on an unparsable PORT, as a warning only.

use std::fmt;
use thiserror::Error;

use crate::modules::events::adapters::outbound::openai_reply_generator::DEFAULT_OPENAI_MODEL;
use crate::shared::infrastructure::store::StoreConfig;
use crate::shared::infrastructure::store::event_log::DEFAULT_EVENT_CAPACITY;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ENV: &str = "dev";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidCapacity { name: &'static str, value: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub env: String,
    pub forward_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub store: StoreConfig,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("env", &self.env)
            .field("forward_url", &self.forward_url)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("openai_model", &self.openai_model)
            .field("store", &self.store)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            env: DEFAULT_ENV.to_string(),
            forward_url: None,
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| non_blank(lookup(name));

        let port = match var("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, fallback = DEFAULT_PORT, "invalid PORT, using fallback");
                DEFAULT_PORT
            }),
        };

        let event_capacity = capacity(var("EVENT_LOG_CAPACITY"), "EVENT_LOG_CAPACITY")?
            .unwrap_or(DEFAULT_EVENT_CAPACITY);
        let session_history_capacity =
            capacity(var("SESSION_HISTORY_CAPACITY"), "SESSION_HISTORY_CAPACITY")?
                .unwrap_or(event_capacity);

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            env: env_name(&lookup),
            forward_url: var("ZAPIER_FORWARD_URL").or_else(|| var("FORWARD_URL")),
            openai_api_key: var("OPENAI_API_KEY"),
            openai_model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            store: StoreConfig {
                event_capacity,
                session_history_capacity,
            },
        })
    }

    pub fn is_dev(&self) -> bool {
        self.env == DEFAULT_ENV
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Whether the process runs in the dev environment, read with the same rules
/// as [`Settings::from_env`]. Used before settings are parsed.
pub fn is_dev_env() -> bool {
    is_dev_lookup(|name| std::env::var(name).ok())
}

fn is_dev_lookup(lookup: impl Fn(&str) -> Option<String>) -> bool {
    env_name(&lookup) == DEFAULT_ENV
}

fn env_name(lookup: &impl Fn(&str) -> Option<String>) -> String {
    non_blank(lookup("ENV")).unwrap_or_else(|| DEFAULT_ENV.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn capacity(raw: Option<String>, name: &'static str) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(ConfigError::InvalidCapacity { name, value: raw }),
    }
}
