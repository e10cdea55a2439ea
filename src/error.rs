//! Service-level error type and its HTTP mapping.
//!
//! Every error response has the same body shape:
//!
//! ```json
//! { "detail": "count must be between 1 and 10" }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::utils::UtilError;

/// Generic message returned for internal faults.
const INTERNAL_DETAIL: &str = "Internal Server Error";

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid input detected by the service or the utility library (400).
    #[error("{message}")]
    Validation { message: String },

    /// Request could not be extracted (malformed JSON, wrong types, ...).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    MethodNotAllowed { message: String },

    /// Unexpected fault. The message is logged, never sent to the client.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => *status,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match self {
            AppError::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                INTERNAL_DETAIL.to_string()
            }
            AppError::Validation { message }
            | AppError::Rejected { message, .. }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message } => message,
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<UtilError> for AppError {
    fn from(err: UtilError) -> Self {
        match err {
            UtilError::InvalidArgument(message) => AppError::Validation { message },
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .next()
            .unwrap_or_else(|| "Validation failed".to_string());

        AppError::Validation { message }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        // Unparseable query values are unprocessable input, as with bodies.
        AppError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: rejection.body_text(),
        }
    }
}
