use std::env;
use std::fmt;
use std::path::PathBuf;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub data: DataFileConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("SAW_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let criteria_csv = required_path("SAW_CRITERIA_CSV", "criteria.csv")?;
        let data_csv = required_path("SAW_DATA_CSV", "data.csv")?;
        let scores_csv = env::var("SAW_SCORES_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            data: DataFileConfig {
                criteria_csv,
                data_csv,
                scores_csv,
            },
        })
    }
}

fn required_path(variable: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(variable) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { variable }),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Default locations for the CSV inputs; CLI flags override these.
#[derive(Debug, Clone)]
pub struct DataFileConfig {
    pub criteria_csv: PathBuf,
    pub data_csv: PathBuf,
    pub scores_csv: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyPath { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { variable } => {
                write!(f, "{variable} must not be set to an empty path")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
