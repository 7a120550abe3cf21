use std::sync::Arc;

use http::StatusCode;
use thiserror::Error;

/// Fatal construction / configuration problems. Never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Seraph refresh token is required")]
    MissingRefreshToken,
    #[error("environment variable {0} must be set to a non-empty value")]
    MissingEnvGuard(&'static str),
    #[error("Invalid token type '{0}', expected one of: legacy, developer")]
    InvalidTokenType(String),
    #[error("Invalid report type '{0}'")]
    InvalidReportType(String),
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("config is not valid: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Why a token refresh did not produce a usable credential.
///
/// Cloneable so callers waiting on an in-flight refresh receive the same failure.
#[derive(Debug, Clone, Error)]
pub enum RefreshError {
    #[error("refresh endpoint rejected the request with status {0}")]
    Rejected(StatusCode),
    #[error("refresh endpoint unreachable: {0}")]
    Unreachable(#[source] Arc<reqwest::Error>),
    #[error("refresh response is not valid: {0}")]
    InvalidBody(String),
    #[error("refresh response contains an empty token")]
    EmptyToken,
    #[error("refresh response contains an invalid expires_at '{0}'")]
    InvalidExpiry(String),
}

impl RefreshError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            RefreshError::Rejected(_) => "rejected",
            RefreshError::Unreachable(_) => "unreachable",
            RefreshError::InvalidBody(_) => "invalid_body",
            RefreshError::EmptyToken => "empty_token",
            RefreshError::InvalidExpiry(_) => "invalid_expiry",
        }
    }
}

/// Failure of a single sub-service request.
///
/// A non-success response keeps the raw body so write paths can surface it verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{body}")]
    Status { status: StatusCode, body: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            ApiError::Decode(_) => None,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "status",
            ApiError::Transport(_) => "transport",
            ApiError::Decode(_) => "decode",
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
