use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::sync::Semaphore;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on, as `host:port`.
    pub listen_addr: String,
    /// Queue depth for connections not yet accepted.
    pub backlog: u32,
    /// Size of the single read performed on each connection.
    pub read_buffer_size: usize,
    /// Upper bound on connections handled at once. Unbounded when unset.
    pub max_connections: Option<usize>,
    /// Value sent in the `Server` header.
    pub server_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub root: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            backlog: 5,
            read_buffer_size: 1024,
            max_connections: None,
            server_name: "staticd".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        check_max_connections(self.max_connections)
    }
}

/// A limit of zero would never admit a connection.
pub fn check_max_connections(max_connections: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_connections {
        anyhow::ensure!(
            (1..=Semaphore::MAX_PERMITS).contains(&max),
            "server.max_connections must be between 1 and {}, got {}",
            Semaphore::MAX_PERMITS,
            max
        );
    }
    Ok(())
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Loads the configuration file named by `CONFIG` (or `config.yaml` when
    /// present), then applies `LISTEN`, `WEB_ROOT`, `LOG_LEVEL` and `LOG_FILE`
    /// from the environment.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => Self::default(),
        };

        cfg.apply_env();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_yaml(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Self = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects settings the server cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server.validate()
    }

    fn apply_env(&mut self) {
        if let Ok(addr) = std::env::var("LISTEN") {
            self.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("WEB_ROOT") {
            self.static_files.root = PathBuf::from(root);
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.log.level = level;
        }
        if let Ok(file) = std::env::var("LOG_FILE") {
            self.log.file = Some(PathBuf::from(file));
        }
    }
}
