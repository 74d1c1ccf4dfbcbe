//! Error types for the calculator service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

// == Calc Error Enum ==
/// Unified error type for the calculator service.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Missing or malformed operand, or an operand the operation rejects
    #[error("{0}")]
    InvalidArgument(String),

    /// The result cache could not read or write an entry
    #[error("Cache failure: {0}")]
    CacheFailure(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        let status = match &self {
            CalcError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CalcError::CacheFailure(msg) => {
                error!("Request failed on cache access: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Plain-text body
        (status, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the calculator service.
pub type Result<T> = std::result::Result<T, CalcError>;
