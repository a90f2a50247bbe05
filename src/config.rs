//! Process-wide configuration, read once at startup

use serde::{Deserialize, Serialize};
use log::debug;

/// Hosted Sea-Lion chat-completion endpoint
pub const SEA_LION_API_URL: &str
  = "https://api.sea-lion.ai/v1/chat/completions";

/// Model preset shown in the form when nothing else is configured
pub const DEFAULT_MODEL: &str
  = "aisingapore/Gemma-SEA-LION-v4-27B-IT";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7860;

/// Completion endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig
{   /// Bearer credential; `None` means every call short-circuits
    #[serde(skip_serializing)]
    pub api_key: Option<String>
  , /// Full chat-completions URL
    pub api_url: String
  , /// Model preset offered to the user
    pub default_model: String
  , /// Request timeout in seconds
    pub timeout_secs: u64
  , /// Sampling temperature used when the caller gives none
    pub temperature: f32
}

impl Default for ProviderConfig
{   fn default() -> Self
    {   ProviderConfig
        {   api_key: None
          , api_url: SEA_LION_API_URL.to_string()
          , default_model: DEFAULT_MODEL.to_string()
          , timeout_secs: DEFAULT_TIMEOUT_SECS
          , temperature: DEFAULT_TEMPERATURE
        }
    }
}

/// Web server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig
{   pub host: String
  , pub port: u16
}

impl Default for ServerConfig
{   fn default() -> Self
    {   ServerConfig
        {   host: DEFAULT_HOST.to_string()
          , port: DEFAULT_PORT
        }
    }
}

impl ServerConfig
{   /// `host:port` string suitable for binding a listener
    pub fn bind_addr(&self) -> String
    {   format!("{}:{}", self.host, self.port)
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig
{   pub provider: ProviderConfig
  , pub server: ServerConfig
}

impl AppConfig
{   /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to defaults; numeric values
    /// that fail to parse are reported as invalid configuration.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let get = |key: &str| {
          lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        };

        let mut config = AppConfig::default();

        config.provider.api_key = get("SEA_LION_API_KEY");
        if let Some(url) = get("SEA_LION_BASE_URL")
        {   config.provider.api_url = url;
        }
        if let Some(model) = get("SEA_LION_MODEL")
        {   config.provider.default_model = model;
        }
        if let Some(secs) = get("SEA_LION_TIMEOUT_SECS")
        {   config.provider.timeout_secs
              = parse_var("SEA_LION_TIMEOUT_SECS", &secs)?;
        }
        if let Some(temp) = get("SEA_LION_TEMPERATURE")
        {   config.provider.temperature
              = parse_var("SEA_LION_TEMPERATURE", &temp)?;
        }
        if let Some(host) = get("HOST")
        {   config.server.host = host;
        }
        if let Some(port) = get("PORT")
        {   config.server.port = parse_var("PORT", &port)?;
        }

        debug!(
          "Loaded config: url={} model={} key_set={}",
          config.provider.api_url,
          config.provider.default_model,
          config.provider.api_key.is_some()
        );
        Ok(config)
    }
}

fn parse_var<T>(key: &str, value: &str)
  -> Result<T, crate::error::Error>
where T: std::str::FromStr
{   value.parse().map_err(|_| {
      crate::error::Error::InvalidConfiguration(
        format!("{} has invalid value: {}", key, value)
      )
    })
}
