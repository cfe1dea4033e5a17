use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
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
    pub rate_sheet: RateSheetConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let default_path = env::var("APP_RATE_SHEET")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let include_header = match env::var("APP_EXPORT_HEADER") {
            Ok(value) => parse_flag("APP_EXPORT_HEADER", &value)?,
            Err(_) => false,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            rate_sheet: RateSheetConfig { default_path },
            export: ExportConfig { include_header },
        })
    }
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            variable,
            value: value.to_string(),
        }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where to find the lender rate sheet when none is given explicitly.
#[derive(Debug, Clone, Default)]
pub struct RateSheetConfig {
    pub default_path: Option<PathBuf>,
}

/// Defaults for saving qualifying loans.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportConfig {
    pub include_header: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFlag { variable: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlag { variable, value } => {
                write!(f, "{variable} must be true or false (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
