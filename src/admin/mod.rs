use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/metrics", get(handlers::metrics))
        .route("/admin/reset", post(handlers::reset))
}
