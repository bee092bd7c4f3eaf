use crate::error::{InsightsError, Result};

/// Hashes a plaintext password with bcrypt at the default cost.
pub fn hash_password(plain: &str) -> Result<String> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST)
        .map_err(|e| InsightsError::Internal(format!("password hashing failed: {e}")))
}

/// Checks a plaintext password against a stored bcrypt hash.
/// A malformed hash counts as a failed verification rather than an error.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hashed = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &hashed));
        assert!(!verify_password("wrong", &hashed));
    }

    #[test]
    fn malformed_hash_fails_closed() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }
}
