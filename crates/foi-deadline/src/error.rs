use crate::config::ConfigError;
use crate::deadlines::DeadlineError;
use crate::telemetry::TelemetryError;
use crate::tracking::{DocketImportError, RequestError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Output(String),
    Deadline(DeadlineError),
    Request(RequestError),
    Docket(DocketImportError),
}

impl AppError {
    /// Errors the caller caused with bad input, as opposed to environment faults.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::Deadline(_) | AppError::Request(_) | AppError::Docket(_)
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Output(detail) => write!(f, "output error: {}", detail),
            AppError::Deadline(err) => write!(f, "deadline error: {}", err),
            AppError::Request(err) => write!(f, "request error: {}", err),
            AppError::Docket(err) => write!(f, "docket error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Output(_) => None,
            AppError::Deadline(err) => Some(err),
            AppError::Request(err) => Some(err),
            AppError::Docket(err) => Some(err),
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

impl From<DeadlineError> for AppError {
    fn from(value: DeadlineError) -> Self {
        Self::Deadline(value)
    }
}

impl From<RequestError> for AppError {
    fn from(value: RequestError) -> Self {
        Self::Request(value)
    }
}

impl From<DocketImportError> for AppError {
    fn from(value: DocketImportError) -> Self {
        Self::Docket(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_jurisdiction_is_an_input_error() {
        let err = AppError::from(DeadlineError::UnknownJurisdiction("atlantis".to_string()));
        assert!(err.is_input_error());
        assert_eq!(
            err.to_string(),
            "deadline error: unknown jurisdiction 'atlantis'"
        );
    }

    #[test]
    fn config_failures_are_not_input_errors() {
        let err = AppError::from(ConfigError::InvalidNumber {
            var: "FOI_FOLLOW_UP_AFTER_DAYS",
        });
        assert!(!err.is_input_error());
        assert!(std::error::Error::source(&err).is_some());
    }
}
