use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct KithConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub agent: AgentConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub temperature: f64,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AgentConfig {
    pub max_rounds: u32,
    pub tool_timeout_secs: u64,
    /// Command used to spawn the MCP tool server for each call.
    /// Empty means the current executable with the `serve` argument.
    pub server_command: Vec<String>,
}

impl Default for KithConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            llm: LlmConfig::default(),
            agent: AgentConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            host: "127.0.0.1".into(),
            port: 8848,
            log_level: "info".into(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".into(),
            model: "qwen3:14b".into(),
            api_key: "ollama".into(),
            temperature: 0.0,
            timeout_secs: 120,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            // Safety bound against a model that never converges to a
            // final answer, not a domain-derived constant.
            max_rounds: 10,
            tool_timeout_secs: 60,
            server_command: Vec::new(),
        }
    }
}

/// Returns `~/.kith/`
pub fn default_kith_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".kith")
}

/// Returns the default config file path: `~/.kith/config.toml`
pub fn default_config_path() -> PathBuf {
    default_kith_dir().join("config.toml")
}

impl KithConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            KithConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (KITH_LLM_BASE_URL,
    /// KITH_LLM_MODEL, KITH_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("KITH_LLM_BASE_URL") {
            self.llm.base_url = val;
        }
        if let Ok(val) = std::env::var("KITH_LLM_MODEL") {
            self.llm.model = val;
        }
        if let Ok(val) = std::env::var("KITH_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }
}
