//! Run configuration
//!
//! Defaults match the stock transparency sweep; every field can be overridden
//! from the environment (a `.env` file is honoured by the binary).

use thiserror::Error;

use crate::data::{ParameterKey, ParameterValues};

pub const DEFAULT_PRESET_COUNT: usize = 11;
pub const DEFAULT_NETWORK_PORT: u16 = 9001;
pub const DEFAULT_HOST: &str = "127.0.0.1";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },

    #[error("NEUROVIZ_REQUIRE_SECRET is set but NEUROVIZ_SECRET is empty")]
    MissingCredential,
}

/// Which oracle implementation answers the comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleMode {
    /// HTTP comparison service
    Remote,
    /// Operator at this terminal
    Terminal,
}

/// Connection settings for the oracle
#[derive(Debug, Clone, PartialEq)]
pub struct OracleConfig {
    pub mode: OracleMode,
    pub host: String,
    pub network_port: u16,
    pub require_credential: bool,
    pub credential: Option<String>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            mode: OracleMode::Remote,
            host: DEFAULT_HOST.to_string(),
            network_port: DEFAULT_NETWORK_PORT,
            require_credential: false,
            credential: None,
        }
    }
}

impl OracleConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.network_port)
    }
}

/// The varying knob, its domain, and the values of every other knob
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub knob: ParameterKey,
    pub start: f32,
    pub end: f32,
    pub fixed: ParameterValues,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            knob: ParameterKey::Transparency,
            start: 0.0,
            end: 1.0,
            fixed: ParameterValues {
                transparency: 0.0,
                see_through: 0.2,
                outline: 0.5,
                smoothness: 1.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DuelConfig {
    pub preset_count: usize,
    pub sweep: SweepConfig,
    pub oracle: OracleConfig,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            preset_count: DEFAULT_PRESET_COUNT,
            sweep: SweepConfig::default(),
            oracle: OracleConfig::default(),
        }
    }
}

impl DuelConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = get("PRESET_COUNT") {
            config.preset_count = parse("PRESET_COUNT", &v)?;
        }
        if let Some(v) = get("SWEEP_KNOB") {
            config.sweep.knob = parse("SWEEP_KNOB", &v)?;
        }
        if let Some(v) = get("SWEEP_START") {
            config.sweep.start = parse("SWEEP_START", &v)?;
        }
        if let Some(v) = get("SWEEP_END") {
            config.sweep.end = parse("SWEEP_END", &v)?;
        }
        if let Some(v) = get("ORACLE_MODE") {
            config.oracle.mode = match v.to_lowercase().as_str() {
                "remote" => OracleMode::Remote,
                "terminal" => OracleMode::Terminal,
                _ => return Err(ConfigError::Invalid { key: "ORACLE_MODE", value: v }),
            };
        }
        if let Some(v) = get("NEUROVIZ_HOST") {
            config.oracle.host = v;
        }
        if let Some(v) = get("NEUROVIZ_PORT") {
            config.oracle.network_port = parse("NEUROVIZ_PORT", &v)?;
        }
        if let Some(v) = get("NEUROVIZ_REQUIRE_SECRET") {
            config.oracle.require_credential = parse_bool("NEUROVIZ_REQUIRE_SECRET", &v)?;
        }
        config.oracle.credential = get("NEUROVIZ_SECRET");

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preset_count == 0 {
            return Err(ConfigError::Invalid {
                key: "PRESET_COUNT",
                value: self.preset_count.to_string(),
            });
        }
        if self.oracle.require_credential && self.oracle.credential.is_none() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid { key, value: value.to_string() })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: value.to_string() }),
    }
}
