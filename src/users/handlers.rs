use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{decode_json, ApiError},
    state::AppState,
    users::{
        dto::{LoginRequest, RegisterRequest, UserResponse},
        password::{hash_password, verify_password},
        repo_types::User,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(register))
        .route("/api/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let payload = decode_json(payload)?;

    if payload.email.is_empty() {
        return Err(ApiError::BadRequest("Email is required"));
    }

    let password_hash = hash_password(&payload.password)?;

    // A duplicate email fails the unique constraint and surfaces as a 500.
    let user = User::create(&state.db, &payload.email, &password_hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let payload = decode_json(payload)?;

    let Some(user) = User::find_by_email(&state.db, &payload.email).await? else {
        warn!(email = %payload.email, "login unknown email");
        return Err(ApiError::Unauthorized);
    };

    // A stored hash that fails to parse counts as an authentication
    // failure, indistinguishable from a wrong password.
    let verified = match verify_password(&payload.password, &user.password_hash) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, user_id = %user.id, "stored password hash failed to parse");
            false
        }
    };

    if !verified {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized);
    }

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(user.into()))
}
