use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kpi_engine::{CredentialError, QueryError};
use thiserror::Error;
use tracing::{error, warn};

use crate::envelope::ErrorBody;

/// Every failure an endpoint can answer with. Renders as
/// `{success:false, message, code}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("Endpoint not found")]
    NotFound,
    #[error("{message}")]
    Internal { code: &'static str, message: &'static str, detail: String },
}

impl ApiError {
    /// Wraps a data-source fault under an endpoint-specific code.
    pub fn internal(code: &'static str, message: &'static str, cause: anyhow::Error) -> Self {
        Self::Internal { code, message, detail: format!("{cause:#}") }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Credentials(e) if !e.is_validation() => StatusCode::UNAUTHORIZED,
            Self::Credentials(_) | Self::Query(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Credentials(e) => e.code(),
            Self::Query(e) => e.code(),
            Self::NotFound => "NOT_FOUND",
            Self::Internal { code, .. } => *code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal { code, detail, .. } => error!(target = "dashboard", code, "{detail}"),
            Self::Query(QueryError::InvalidLimit { raw }) => warn!(target = "dashboard", limit = %raw, "rejected limit"),
            _ => {}
        }
        let body = ErrorBody { success: false, message: self.to_string(), code: self.code().to_string() };
        (status, Json(body)).into_response()
    }
}
