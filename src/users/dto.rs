use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo_types::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Client-safe projection of a user. There is no password field here, so
/// the hash cannot leak through serialization.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            created_at: datetime!(2024-05-01 12:00 UTC),
            updated_at: datetime!(2024-05-01 12:00 UTC),
            email: "walt@chirpy.local".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$AAAA".into(),
        }
    }

    #[test]
    fn response_never_contains_the_password_hash() {
        let json = serde_json::to_value(UserResponse::from(sample_user())).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("id"));
        assert!(object.contains_key("email"));
        assert!(object.contains_key("created_at"));
        assert!(object.contains_key("updated_at"));
        assert!(!json.to_string().contains("argon2"));
        assert!(!object.keys().any(|k| k.contains("password")));
    }

    #[test]
    fn timestamps_serialize_as_rfc3339() {
        let json = serde_json::to_value(UserResponse::from(sample_user())).unwrap();
        assert_eq!(json["created_at"], "2024-05-01T12:00:00Z");
    }
}
