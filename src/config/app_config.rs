use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub contracts: ContractsConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Contract feed and cache tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContractsConfig {
    /// URL of the static contract feed document
    pub source_url: String,
    /// TTL of the shared collection cache entry, in seconds
    pub collection_ttl_secs: u64,
    /// TTL of per-contract detail cache entries, in seconds
    pub detail_ttl_secs: u64,
    /// Rows per page in the list view
    pub page_size: usize,
    /// Default window for the expiring-soon view, in days
    pub expiring_window_days: i64,
}

/// Mock authentication settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// The one accepted password; any username works with it
    pub password: String,
    /// Where to persist the session across restarts; in-memory when unset
    pub session_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            source_url: "http://127.0.0.1:8081/contracts.json".to_string(),
            collection_ttl_secs: 5 * 60,
            detail_ttl_secs: 3 * 60,
            page_size: 10,
            expiring_window_days: 60,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password: "test123".to_string(),
            session_file: None,
        }
    }
}

impl ContractsConfig {
    pub fn collection_ttl(&self) -> Duration {
        Duration::from_secs(self.collection_ttl_secs)
    }

    pub fn detail_ttl(&self) -> Duration {
        Duration::from_secs(self.detail_ttl_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
