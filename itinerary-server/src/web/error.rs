//! Application error type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::itinerary::{EndpointError, ItineraryError};

use super::dto::ErrorResponse;

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
pub enum AppError {
    /// The payload is malformed.
    BadRequest { message: String },

    /// The payload is well-formed but has no answer (e.g. a pure cycle).
    Unprocessable { message: String },

    /// Something failed on our side.
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<ItineraryError> for AppError {
    fn from(e: ItineraryError) -> Self {
        let message = e.to_string();
        match e {
            ItineraryError::Empty | ItineraryError::Endpoint(EndpointError::Empty) => {
                AppError::BadRequest { message }
            }
            ItineraryError::Endpoint(EndpointError::NoStart | EndpointError::NoEnd) => {
                AppError::Unprocessable { message }
            }
            ItineraryError::Endpoint(EndpointError::TaskFailed(_)) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
