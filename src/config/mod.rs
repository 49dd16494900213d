mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, ContractsConfig, LogFormat, LoggingConfig, ServerConfig,
};
