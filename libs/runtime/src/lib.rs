pub mod config;
pub mod logging;

pub use config::{
    ApiConfig, AppConfig, CliArgs, DatabaseConfig, LoggingConfig, RateLimitConfig, Section,
    ServerConfig,
};
