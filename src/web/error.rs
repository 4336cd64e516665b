//! Error types for web handlers.
//!
//! Domain errors are mapped to HTTP status codes here. Server-side failures
//! are logged with their cause and reported to the client without details.

use crate::errors::Error;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        match &error {
            Error::UserNotFound { .. }
            | Error::ProductNotFound { .. }
            | Error::OrderNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", error.to_string())
            }
            Error::Validation { .. } | Error::InvalidPrice { .. } | Error::InvalidQuantity { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", error.to_string())
            }
            Error::InvalidTransition { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "INVALID_TRANSITION", error.to_string())
            }
            Error::Config { .. } | Error::Database(_) | Error::Io(_) => {
                tracing::error!("Request failed: {error}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error",
                )
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code,
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (Error::OrderNotFound { id: 1 }, StatusCode::NOT_FOUND),
            (
                Error::UserNotFound {
                    email: "x@y.z".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (Error::validation("bad"), StatusCode::BAD_REQUEST),
            (Error::InvalidQuantity { quantity: 0 }, StatusCode::BAD_REQUEST),
            (
                Error::InvalidTransition {
                    order_id: 1,
                    from: "delivered".to_string(),
                    to: "new".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::Database(sea_orm::DbErr::Custom("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let error = ApiError::from(Error::Database(sea_orm::DbErr::Custom(
            "secret table layout".to_string(),
        )));
        assert!(!error.message.contains("secret"));
    }
}
