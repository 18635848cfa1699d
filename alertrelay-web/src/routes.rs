use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/alert",
            post(handlers::receive_alert).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health_check))
}
