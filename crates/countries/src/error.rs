use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use countries_core::query::QueryError;
use serde::Serialize;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable {
        status: Option<u16>,
        message: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::UpstreamUnavailable { .. } | Error::Decode(_) => StatusCode::BAD_GATEWAY,
            Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Error::UpstreamUnavailable { .. } => "upstream_unavailable",
            Error::Decode(_) => "decode_error",
            Error::InvalidArgument(_) => "invalid_argument",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            log::warn!("{}", self);
        } else {
            log::info!("Rejected request: {}", self);
        }

        let body = ErrorBody {
            error: self.kind(),
            status: match &self {
                Error::UpstreamUnavailable { status, .. } => *status,
                _ => None,
            },
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
