use sqlx::PgPool;
use uuid::Uuid;

use crate::chirps::repo_types::Chirp;

impl Chirp {
    /// Insert a chirp. Identifier and timestamps are assigned by the
    /// database.
    pub async fn create(db: &PgPool, body: &str, user_id: Uuid) -> anyhow::Result<Chirp> {
        let chirp = sqlx::query_as::<_, Chirp>(
            r#"
            INSERT INTO chirps (body, user_id)
            VALUES ($1, $2)
            RETURNING id, created_at, updated_at, body, user_id
            "#,
        )
        .bind(body)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(chirp)
    }

    /// All chirps, oldest first.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Chirp>> {
        let chirps = sqlx::query_as::<_, Chirp>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(chirps)
    }

    pub async fn find_by_id(db: &PgPool, chirp_id: Uuid) -> anyhow::Result<Option<Chirp>> {
        let chirp = sqlx::query_as::<_, Chirp>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(chirp_id)
        .fetch_optional(db)
        .await?;
        Ok(chirp)
    }
}
