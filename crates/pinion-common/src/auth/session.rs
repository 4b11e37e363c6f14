//! Session tokens
//!
//! Signed JWTs (HS256) carrying the user id and email, issued on sign-up and sign-in.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use pinion_core::UserId;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.sub.clone())
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// A freshly signed token with its validity window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies session tokens
#[derive(Clone)]
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_secs: i64,
}

impl SessionTokenService {
    #[must_use]
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_secs,
        }
    }

    /// Sign a token for a user
    ///
    /// Fails if the configured lifetime is not positive or does not fit in a timestamp.
    pub fn issue(&self, user_id: &UserId, email: &str) -> Result<IssuedToken, AppError> {
        let issued_at = Utc::now();
        let expires_at = Duration::try_seconds(self.expiry_secs)
            .filter(|lifetime| *lifetime > Duration::zero())
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::internal(anyhow::anyhow!(
                    "Session lifetime out of range: {}s",
                    self.expiry_secs
                ))
            })?;

        let claims = SessionClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode session token")))?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at,
        })
    }

    /// Verify a token's signature and expiry
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }

    /// Expiry of a verified token as a timestamp
    pub fn expires_at(claims: &SessionClaims) -> DateTime<Utc> {
        Utc.timestamp_opt(claims.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl std::fmt::Debug for SessionTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("expiry_secs", &self.expiry_secs)
            .finish_non_exhaustive()
    }
}
