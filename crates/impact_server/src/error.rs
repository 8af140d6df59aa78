//! HTTP error mapping
//!
//! Converts estimator failures into JSON error bodies with a status code
//! that tells the client whether to fix the payload or the values in it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use impact_core::EstimatorError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by the estimate handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure raised by the estimator kernel
    #[error(transparent)]
    Estimator(#[from] EstimatorError),
}

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Offending input field, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    /// Status code for this error
    ///
    /// - 400: the body is not a valid input record
    /// - 422: the record decoded but its values cannot be projected
    /// - 500: the result could not be rendered
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Estimator(err) if err.is_input_error() => StatusCode::BAD_REQUEST,
            ApiError::Estimator(EstimatorError::Serialisation(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Estimator(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Estimator(err) => ErrorResponse {
                error: err.code().to_string(),
                message: err.to_string(),
                field: err.field().map(str::to_string),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();

        if status.is_server_error() {
            tracing::error!(code = %body.error, "{}", body.message);
        } else {
            tracing::warn!(code = %body.error, status = status.as_u16(), "{}", body.message);
        }

        (status, Json(body)).into_response()
    }
}
