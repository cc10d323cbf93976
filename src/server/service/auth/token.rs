//! JWT issuance and validation.
//!
//! Tokens are HS256 signed with the configured secret and carry the user's email as
//! subject together with the ID, role and pseudo so requests can be authorized
//! without a database round trip.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::model::user::User;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the user.
    pub sub: String,
    pub id: i32,
    pub role: String,
    pub pseudo: String,
    /// Issued at, seconds since the epoch.
    pub iat: i64,
    /// Expiration, seconds since the epoch.
    pub exp: i64,
}

/// Signs and validates tokens with a shared HS256 secret.
///
/// Cheap to clone, the keys are plain byte buffers.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_ms: i64,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - Symmetric signing secret
    /// - `expiration_ms` - Lifetime of issued tokens in milliseconds
    pub fn new(secret: &str, expiration_ms: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_ms,
        }
    }

    /// Issues a token for the user expiring after the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(JwtError)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, JwtError> {
        let now = Utc::now().timestamp_millis();
        let claims = Claims {
            sub: user.email.clone(),
            id: user.id,
            role: user.role.as_str().to_string(),
            pseudo: user.pseudo.clone(),
            iat: now / 1000,
            exp: (now + self.expiration_ms) / 1000,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Validates signature and expiration and returns the claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(JwtError)` - Token is malformed, expired or signed with another secret
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::user::Role;

    fn user() -> User {
        User {
            id: 7,
            pseudo: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: String::new(),
            role: Role::Admin,
        }
    }

    /// Tests issuing and validating a token.
    ///
    /// Verifies the claims carry the user's email as subject along with ID, role and
    /// pseudo.
    ///
    /// Expected: Ok with matching claims
    #[test]
    fn round_trips_claims() {
        let tokens = TokenService::new("secret", 60_000);

        let token = tokens.issue(&user()).unwrap();
        let claims = tokens.validate(&token).unwrap();

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.id, 7);
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(claims.pseudo, "alice");
        assert!(claims.exp > claims.iat);
    }

    /// Expected: Err for a token that expired before validation
    #[test]
    fn rejects_expired_token() {
        // Past the default 60 second leeway.
        let tokens = TokenService::new("secret", -300_000);

        let token = tokens.issue(&user()).unwrap();

        assert!(tokens.validate(&token).is_err());
    }

    /// Expected: Err when validating with a different secret
    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new("secret", 60_000).issue(&user()).unwrap();

        assert!(TokenService::new("other", 60_000).validate(&token).is_err());
    }
}
