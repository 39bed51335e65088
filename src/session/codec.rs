use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::session::{Principal, SessionClaims};
use crate::utils::Config;

#[derive(Error, Debug)]
pub enum SignTokenError {
    #[error("token signing failed: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    #[error("token lifetime is out of range")]
    InvalidLifetime,
}

/// Verification failures are distinguished here for logging and tests, but
/// every one of them maps to the same 401 at the HTTP boundary.
#[derive(Error, Debug, PartialEq)]
pub enum VerifyTokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token could not be decoded")]
    Malformed,
}

/// Stateless HS256 signer/verifier for session tokens.
///
/// The keys are derived once from the configured secret; nothing here reads
/// the environment at request time. A token is valid iff its signature checks
/// out against that secret and its `exp` is still in the future.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(config: &Config) -> Self {
        let secret = config.secret_key().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        // No leeway: expiry is the sole validity bound besides the signature.
        validation.leeway = 0;

        TokenCodec {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    // Sign a fresh claims value carrying the given user, expiring ttl seconds
    // from now.
    pub fn sign(&self, user: &Principal, ttl_seconds: i64) -> Result<String, SignTokenError> {
        let delta =
            chrono::Duration::try_seconds(ttl_seconds).ok_or(SignTokenError::InvalidLifetime)?;

        let now = Utc::now();

        let exp: usize = now
            .checked_add_signed(delta)
            .ok_or(SignTokenError::InvalidLifetime)?
            .timestamp()
            .try_into()
            .map_err(|_| SignTokenError::InvalidLifetime)?;

        let iat: usize = now
            .timestamp()
            .try_into()
            .map_err(|_| SignTokenError::InvalidLifetime)?;

        let claims = SessionClaims {
            user: user.clone(),
            iat,
            exp,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    // Decode and validate a session token (signature + expiry).
    pub fn verify(&self, token: &str) -> Result<SessionClaims, VerifyTokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => VerifyTokenError::Expired,
                ErrorKind::InvalidSignature => VerifyTokenError::InvalidSignature,
                _ => VerifyTokenError::Malformed,
            })
    }
}
