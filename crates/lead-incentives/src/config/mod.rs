use crate::workflows::incentives::{IncentiveTiers, TargetZone};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub incentives: IncentiveSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat(raw))?,
            Err(_) => LogFormat::Compact,
        };

        let target_zone = match env::var("LEADS_TARGET_ZONE") {
            Ok(raw) => TargetZone::parse(&raw).ok_or(ConfigError::InvalidTargetZone(raw))?,
            Err(_) => TargetZone::default(),
        };

        let tiers = match env::var("LEADS_INCENTIVE_TIERS") {
            Ok(path) if !path.trim().is_empty() => load_tiers(PathBuf::from(path.trim()))?,
            _ => IncentiveTiers::standard(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level, format },
            incentives: IncentiveSettings { target_zone, tiers },
        })
    }
}

fn load_tiers(path: PathBuf) -> Result<IncentiveTiers, ConfigError> {
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::TiersIo {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::TiersFormat { path, source })
}

/// Rule inputs shared by every evaluation in a process.
#[derive(Debug, Clone)]
pub struct IncentiveSettings {
    pub target_zone: TargetZone,
    pub tiers: IncentiveTiers,
}

/// Tracing output controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLogFormat(String),
    InvalidTargetZone(String),
    TiersIo {
        path: PathBuf,
        source: std::io::Error,
    },
    TiersFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json' (got '{value}')")
            }
            ConfigError::InvalidTargetZone(value) => write!(
                f,
                "LEADS_TARGET_ZONE must be 'central' or 'eastern' (got '{value}')"
            ),
            ConfigError::TiersIo { path, .. } => {
                write!(f, "unable to read incentive tiers from {}", path.display())
            }
            ConfigError::TiersFormat { path, .. } => {
                write!(f, "incentive tiers in {} are not valid JSON", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidLogFormat(_) | ConfigError::InvalidTargetZone(_) => None,
            ConfigError::TiersIo { source, .. } => Some(source),
            ConfigError::TiersFormat { source, .. } => Some(source),
        }
    }
}
