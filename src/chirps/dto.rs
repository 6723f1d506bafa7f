use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::chirps::repo_types::Chirp;

/// Request body for posting a chirp.
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
    pub user_id: Uuid,
}

/// Request body for the pre-post text check.
#[derive(Debug, Deserialize)]
pub struct ValidateChirpRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct CleanedChirp {
    pub cleaned_body: String,
}

/// Client-safe projection of a chirp.
#[derive(Debug, Serialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub body: String,
    pub user_id: Uuid,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}
