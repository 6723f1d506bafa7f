use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod password;
mod repo;
pub mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
