use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{InsightsError, Result};

/// Payload carried in an access token. `sub` is the user's email.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

pub fn create_access_token(email: &str, secret: &str, expire_minutes: i64) -> Result<String> {
    let exp = Utc::now() + Duration::minutes(expire_minutes);
    let claims = Claims {
        sub: email.to_string(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| InsightsError::Internal(format!("token signing failed: {e}")))
}

pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| InsightsError::Auth("invalid or expired token".to_string()))
}
