use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::export::ExportError;
use crate::workflows::intake::PromptError;
use crate::workflows::qualifier::ApplicantError;
use crate::workflows::rate_sheet::RateSheetError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    RateSheet(RateSheetError),
    Applicant(ApplicantError),
    Prompt(PromptError),
    Export(ExportError),
    Render(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::RateSheet(err) => write!(f, "rate sheet error: {}", err),
            AppError::Applicant(err) => write!(f, "invalid applicant input: {}", err),
            AppError::Prompt(err) => write!(f, "input error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
            AppError::Render(err) => write!(f, "failed to render results: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::RateSheet(err) => Some(err),
            AppError::Applicant(err) => Some(err),
            AppError::Prompt(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::Render(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RateSheetError> for AppError {
    fn from(value: RateSheetError) -> Self {
        Self::RateSheet(value)
    }
}

impl From<ApplicantError> for AppError {
    fn from(value: ApplicantError) -> Self {
        Self::Applicant(value)
    }
}

impl From<PromptError> for AppError {
    fn from(value: PromptError) -> Self {
        match value {
            PromptError::Applicant(err) => Self::Applicant(err),
            other => Self::Prompt(other),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}
