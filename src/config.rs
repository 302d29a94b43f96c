use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "perseus.yml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port the listener binds to.
    pub port: u16,
    /// Listen backlog passed to the socket.
    pub backlog: u32,
    /// Minimum seconds between listening-socket recreation attempts.
    pub restart_cooldown_secs: u64,
    /// Value of the `Server` response header.
    pub signature: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8090,
            backlog: 100,
            restart_cooldown_secs: 60,
            signature: "Perseus".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory served as the web root.
    pub root: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `PERSEUS_CONFIG`
    /// (default `perseus.yml`). A missing or unreadable file yields the
    /// built-in defaults.
    pub fn load() -> Self {
        let path = std::env::var("PERSEUS_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_yaml(&text).unwrap_or_else(|e| {
                tracing::warn!("Invalid config file {}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
