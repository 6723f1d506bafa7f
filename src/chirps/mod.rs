use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod moderation;
mod repo;
pub mod repo_types;
pub mod validation;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
