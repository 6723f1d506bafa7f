use thiserror::Error;

/// Longest chirp body accepted at creation time, in characters.
pub const MAX_CHIRP_LEN: usize = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChirpBodyError {
    #[error("Chirp is too long")]
    TooLong,
    #[error("Body is required")]
    Required,
}

/// Check a chirp body against the length rules, in order: too long, then
/// empty. Returns the body untouched on success; moderation is a separate
/// transform and never applies to stored content.
pub fn validate_chirp_body(body: &str) -> Result<&str, ChirpBodyError> {
    if body.chars().count() > MAX_CHIRP_LEN {
        return Err(ChirpBodyError::TooLong);
    }
    if body.is_empty() {
        return Err(ChirpBodyError::Required);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_normal_body_unchanged() {
        let body = "a perfectly ordinary kerfuffle";
        assert_eq!(validate_chirp_body(body), Ok(body));
    }

    #[test]
    fn accepts_exactly_the_limit() {
        let body = "a".repeat(MAX_CHIRP_LEN);
        assert!(validate_chirp_body(&body).is_ok());
    }

    #[test]
    fn rejects_one_over_the_limit() {
        let body = "a".repeat(MAX_CHIRP_LEN + 1);
        assert_eq!(validate_chirp_body(&body), Err(ChirpBodyError::TooLong));
    }

    #[test]
    fn rejects_an_empty_body() {
        assert_eq!(validate_chirp_body(""), Err(ChirpBodyError::Required));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let body = "é".repeat(MAX_CHIRP_LEN);
        assert!(body.len() > MAX_CHIRP_LEN);
        assert!(validate_chirp_body(&body).is_ok());
    }
}
