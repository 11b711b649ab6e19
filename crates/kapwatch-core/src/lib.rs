use thiserror::Error;

pub mod app_config;
pub mod calendar;
pub mod config;
pub mod types;

pub use app_config::AppConfig;
pub use calendar::BusinessCalendar;
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{clean_cell, ReportRow};

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
