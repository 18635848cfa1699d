use alertrelay_core::RelayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to parse alert data: {0}")]
    BadAlert(#[source] RelayError),

    #[error("Failed to send alert: {0}")]
    Delivery(#[source] RelayError),

    #[error("Invalid request method")]
    MethodNotAllowed,
}

pub type AppResult<T> = Result<T, AppError>;

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        if err.is_parse_error() {
            AppError::BadAlert(err)
        } else {
            AppError::Delivery(err)
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadAlert(_) => StatusCode::BAD_REQUEST,
            AppError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    // Plain-text bodies; details stay in the server log.
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::BadAlert(e) => {
                warn!("Failed to decode alert: {}", e);
                "Failed to parse alert data\n"
            }
            AppError::Delivery(e) => {
                error!("Failed to send alert: {}", e);
                "Failed to send alert to Green API\n"
            }
            AppError::MethodNotAllowed => {
                warn!("Rejected request with unsupported method");
                "Invalid request method\n"
            }
        };

        (self.status_code(), body).into_response()
    }
}
