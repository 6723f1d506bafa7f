use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    chirps::{
        dto::{ChirpResponse, CleanedChirp, CreateChirpRequest, ValidateChirpRequest},
        moderation::censor,
        repo_types::Chirp,
        validation::validate_chirp_body,
    },
    error::{decode_json, ApiError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/validate_chirp", post(validate_chirp))
        .route("/api/chirps", get(list_chirps).post(create_chirp))
        .route("/api/chirps/:chirp_id", get(get_chirp))
}

/// Pre-post text check. The censored body is only ever returned here; the
/// create path stores the raw text.
#[instrument(skip(payload))]
pub async fn validate_chirp(
    payload: Result<Json<ValidateChirpRequest>, JsonRejection>,
) -> Result<Json<CleanedChirp>, ApiError> {
    let payload = decode_json(payload)?;
    let body = validate_chirp_body(&payload.body)?;
    Ok(Json(CleanedChirp {
        cleaned_body: censor(body),
    }))
}

#[instrument(skip(state, payload))]
pub async fn create_chirp(
    State(state): State<AppState>,
    payload: Result<Json<CreateChirpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ChirpResponse>), ApiError> {
    let payload = decode_json(payload)?;
    validate_chirp_body(&payload.body)?;

    let chirp = Chirp::create(&state.db, &payload.body, payload.user_id).await?;

    info!(chirp_id = %chirp.id, user_id = %chirp.user_id, "chirp created");
    Ok((StatusCode::CREATED, Json(chirp.into())))
}

#[instrument(skip(state))]
pub async fn list_chirps(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChirpResponse>>, ApiError> {
    let chirps = Chirp::list_all(&state.db).await?;
    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<ChirpResponse>, ApiError> {
    let chirp_id =
        Uuid::parse_str(&chirp_id).map_err(|_| ApiError::BadRequest("Invalid chirp id"))?;

    let chirp = Chirp::find_by_id(&state.db, chirp_id)
        .await?
        .ok_or(ApiError::NotFound("Chirp"))?;

    Ok(Json(chirp.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chirps::validation::ChirpBodyError;

    #[tokio::test]
    async fn validate_chirp_returns_the_cleaned_body() {
        let payload = Ok(Json(ValidateChirpRequest {
            body: "this is a kerfuffle".into(),
        }));
        let Json(cleaned) = validate_chirp(payload).await.unwrap();
        assert_eq!(cleaned.cleaned_body, "this is a ****");
    }

    #[tokio::test]
    async fn validate_chirp_rejects_an_oversized_body() {
        let payload = Ok(Json(ValidateChirpRequest {
            body: "a".repeat(141),
        }));
        let err = validate_chirp(payload).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ChirpBodyError::TooLong)
        ));
    }

    #[tokio::test]
    async fn validate_chirp_rejects_an_empty_body() {
        let payload = Ok(Json(ValidateChirpRequest { body: String::new() }));
        let err = validate_chirp(payload).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ChirpBodyError::Required)
        ));
    }
}
