use anyhow::{anyhow, Result};
/// Bearer token validation for the social API.
///
/// Tokens are minted by the identity service with a shared HS256 secret;
/// this service only validates them and trusts `sub`. The encode side is
/// kept for local tooling and tests.
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use uuid::Uuid;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type: "access"
    pub token_type: String,
    /// Username
    pub username: String,
}

// Thread-safe mutable storage for the shared secret loaded at startup
lazy_static! {
    static ref JWT_KEYS: RwLock<Option<(EncodingKey, DecodingKey)>> = RwLock::new(None);
}

/// Initialize the token keys from the shared secret.
/// Must be called during application startup before any token operations.
pub fn initialize_secret(secret: &str) -> Result<()> {
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    let mut keys = JWT_KEYS
        .write()
        .map_err(|e| anyhow!("Failed to acquire write lock on JWT keys: {}", e))?;
    *keys = Some((encoding_key, decoding_key));

    Ok(())
}

fn get_encoding_key() -> Result<EncodingKey> {
    let keys = JWT_KEYS
        .read()
        .map_err(|e| anyhow!("Failed to acquire read lock on JWT keys: {}", e))?;

    keys.as_ref().map(|(enc, _)| enc.clone()).ok_or_else(|| {
        anyhow!("JWT keys not initialized. Call initialize_secret() during startup")
    })
}

fn get_decoding_key() -> Result<DecodingKey> {
    let keys = JWT_KEYS
        .read()
        .map_err(|e| anyhow!("Failed to acquire read lock on JWT keys: {}", e))?;

    keys.as_ref().map(|(_, dec)| dec.clone()).ok_or_else(|| {
        anyhow!("JWT keys not initialized. Call initialize_secret() during startup")
    })
}

/// Generate an access token. The identity service is the normal issuer;
/// this is used by integration tests and the local token tool.
pub fn generate_access_token(user_id: Uuid, username: &str, ttl_secs: i64) -> Result<String> {
    let now = Utc::now();
    let expiry = now + Duration::seconds(ttl_secs.max(1));

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: expiry.timestamp(),
        token_type: "access".to_string(),
        username: username.to_string(),
    };

    let encoding_key = get_encoding_key()?;
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
        .map_err(|e| anyhow!("Failed to generate access token: {}", e))
}

/// Validate and decode a token
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = get_decoding_key()?;
    decode::<Claims>(token, &decoding_key, &Validation::new(Algorithm::HS256))
        .map_err(|e| anyhow!("Token validation failed: {}", e))
}

/// Extract user ID from token
pub fn get_user_id_from_token(token: &str) -> Result<Uuid> {
    let token_data = validate_token(token)?;
    Uuid::parse_str(&token_data.claims.sub).map_err(|e| anyhow!("Invalid user ID in token: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "unit-test-secret";

    #[test]
    fn test_token_round_trip() {
        initialize_secret(TEST_SECRET).unwrap();

        let user_id = Uuid::new_v4();
        let token = generate_access_token(user_id, "alice", 3600).unwrap();
        // JWT tokens have 3 parts separated by dots
        assert_eq!(token.matches('.').count(), 2);

        let data = validate_token(&token).unwrap();
        assert_eq!(data.claims.username, "alice");
        assert_eq!(data.claims.token_type, "access");
        assert_eq!(get_user_id_from_token(&token).unwrap(), user_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        initialize_secret(TEST_SECRET).unwrap();

        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            token_type: "access".to_string(),
            username: "bob".to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        initialize_secret(TEST_SECRET).unwrap();
        assert!(validate_token("not.a.token").is_err());
    }
}
