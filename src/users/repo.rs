use sqlx::PgPool;

use crate::users::repo_types::User;

impl User {
    /// Create a new user with hashed password. Identifier and timestamps
    /// are assigned by the database; a duplicate email surfaces here as a
    /// unique-constraint error.
    pub async fn create(db: &PgPool, email: &str, password_hash: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, created_at, updated_at, email, password_hash
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, created_at, updated_at, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Delete every user. Chirps cascade. Returns the number of rows
    /// removed.
    pub async fn delete_all(db: &PgPool) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM users").execute(db).await?;
        Ok(result.rows_affected())
    }
}
