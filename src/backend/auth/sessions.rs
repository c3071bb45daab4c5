/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * Keys are derived once from the configured secret and shared through
 * `AppState`.
 */

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::ChatError;
use crate::shared::UserId;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys for bearer tokens
#[derive(Clone)]
pub struct SessionKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    ttl: Duration,
}

impl SessionKeys {
    /// Derive HMAC keys from a shared secret
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            ttl,
        }
    }

    /// Create a JWT token for a user
    pub fn create_token(&self, user_id: UserId, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: (now + self.ttl).timestamp().max(0) as u64,
            iat: now.timestamp().max(0) as u64,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a JWT token
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }

    /// Extract the caller identity from a token
    ///
    /// Any verification failure, including a malformed subject, is
    /// reported as `Unauthenticated`.
    pub fn user_id_from_token(&self, token: &str) -> Result<UserId, ChatError> {
        let claims = self.verify_token(token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            ChatError::unauthenticated()
        })?;

        claims.sub.parse::<UserId>().map_err(|e| {
            tracing::warn!("Invalid user ID in token: {}", e);
            ChatError::unauthenticated()
        })
    }
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}
