use crate::core::errors::TiffinError;
use crate::core::models::user::UserRole;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Stateless session credential. The role rides along so the admin
/// middleware never has to re-read the user document.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: UserRole,
    pub exp: usize,
}

pub struct JwtService {
    secret: String,
    token_ttl: Duration,
}

impl JwtService {
    pub fn new(secret: String, token_ttl: Duration) -> Self {
        JwtService { secret, token_ttl }
    }

    pub fn generate_token(&self, user_id: &str, role: UserRole) -> Result<String, TiffinError> {
        let expires_at = Utc::now() + self.token_ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: expires_at.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| TiffinError::InternalServerError(format!("JWT encoding error: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, TiffinError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| TiffinError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}
