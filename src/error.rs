use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::tmdb::TmdbError;

/// Result type for page handlers
pub type PageResult = Result<Html<String>, NetstarError>;

#[derive(Debug, thiserror::Error)]
pub enum NetstarError {
    #[error(transparent)]
    Tmdb(#[from] TmdbError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for NetstarError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<validator::ValidationErrors> for NetstarError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Config(e.to_string())
    }
}

impl NetstarError {
    /// Drop the request URL from transport errors; it carries the API key
    #[must_use]
    pub fn without_url(self) -> Self {
        match self {
            Self::Tmdb(TmdbError::Network(e)) => Self::Tmdb(TmdbError::Network(e.without_url())),
            other => other,
        }
    }
}

/// Every failure renders as a plain-text 500 carrying the error message
impl IntoResponse for NetstarError {
    fn into_response(self) -> Response {
        let error = self.without_url();
        match &error {
            Self::Tmdb(e) => tracing::error!(status = ?e.status(), "TMDB request failed: {e}"),
            other => tracing::error!("Request failed: {other}"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
    }
}
