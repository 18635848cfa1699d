use axum::{body::Bytes, extract::State, http::StatusCode};

use crate::{error_handling::AppError, AppResult, AppState};

/// Relay the alert in the request body. The body is decoded regardless of
/// its declared content type.
pub async fn receive_alert(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, &'static str)> {
    tracing::debug!("Received alert payload of {} bytes", body.len());

    state.relay.relay(&body).await?;

    tracing::info!("Alert processed and sent to Green API");
    Ok((StatusCode::OK, "Alert sent successfully\n"))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
