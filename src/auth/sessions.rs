/**
 * Session Tokens
 *
 * This module handles the signed tokens that back login sessions. A
 * session is a claims payload signed with the server's session secret
 * and carried in an http-only cookie; verifying the signature and
 * expiry recovers the logged-in user id.
 *
 * The secret comes from server configuration and is passed in by the
 * caller, so token handling itself holds no ambient state.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Session lifetime: 30 days
const SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Signed session claims
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a signed session token for a user
///
/// # Arguments
/// * `secret` - Session signing secret from configuration
/// * `user_id` - User ID
/// * `email` - User email
///
/// # Returns
/// Signed token string
pub fn create_session_token(
    secret: &str,
    user_id: i64,
    email: String,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = SessionClaims {
        sub: user_id.to_string(),
        email,
        exp: now + SESSION_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// Fails when the signature does not match the secret or the token has
/// expired.
pub fn verify_session_token(
    secret: &str,
    token: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<SessionClaims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Extract the user id from verified claims
///
/// Returns None when the subject is not a well-formed id.
pub fn user_id_from_claims(claims: &SessionClaims) -> Option<i64> {
    claims.sub.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-session-secret";

    #[test]
    fn test_create_token() {
        let token = create_session_token(SECRET, 1, "test@example.com".to_string());
        assert!(token.is_ok());
        assert!(!token.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token_round_trip() {
        let token = create_session_token(SECRET, 7, "test@example.com".to_string()).unwrap();

        let claims = verify_session_token(SECRET, &token).unwrap();
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.sub, "7");
        assert!(claims.exp > claims.iat);
        assert_eq!(user_id_from_claims(&claims), Some(7));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = create_session_token(SECRET, 1, "test@example.com".to_string()).unwrap();
        assert!(verify_session_token("another-secret", &token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(verify_session_token(SECRET, "invalid.token.here").is_err());
    }

    #[test]
    fn test_malformed_subject_yields_no_id() {
        let claims = SessionClaims {
            sub: "not-a-number".to_string(),
            email: "test@example.com".to_string(),
            exp: 2,
            iat: 1,
        };
        assert_eq!(user_id_from_claims(&claims), None);
    }
}
