use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::validation::ValidationErrors;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Api {
        status: StatusCode,
        message: String,
        code: Option<String>,
    },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Not authenticated")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
}

/// Error payload the backend sends with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub code: Option<String>,
}

impl AppError {
    /// Builds the normalized error for a failed response from its raw body.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let (message, code) = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody { message, code }) => (
                message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string()),
                code,
            ),
            Err(_) => (GENERIC_ERROR_MESSAGE.to_string(), None),
        };
        AppError::Api {
            status,
            message,
            code,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::Forbidden => Some(StatusCode::FORBIDDEN),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            AppError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

pub type AppResult<T> = Result<T, AppError>;
