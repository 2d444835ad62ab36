//! Core token issuer implementation

use super::types::{SessionClaims, TokenIssuer};
use crate::config::AuthConfig;
use crate::utils::error::{PlatformError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, warn};

impl TokenIssuer {
    /// Create a new token issuer
    ///
    /// A missing signing secret fails construction; this is checked once at
    /// startup, never per request.
    pub fn new(config: &AuthConfig) -> Result<Self> {
        if config.jwt_secret.is_empty() {
            return Err(PlatformError::config("JWT secret is not configured"));
        }

        let secret = config.jwt_secret.as_bytes();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Sign a claim set into a session token
    pub fn issue(&self, claims: &SessionClaims) -> Result<String> {
        let header = Header::new(self.algorithm);
        let token = encode(&header, claims, &self.encoding_key).map_err(PlatformError::Jwt)?;

        debug!("Issued session token for principal: {}", claims.id);
        Ok(token)
    }

    /// Verify a session token and return its claims
    pub fn verify(&self, token: &str) -> Result<SessionClaims> {
        let mut validation = Validation::new(self.algorithm);
        // Tokens carry no exp or aud claims; only the signature is checked
        validation.required_spec_claims = Default::default();
        validation.validate_exp = false;
        validation.validate_aud = false;

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                warn!("Session token verification failed: {}", e);
                PlatformError::unauthorized("invalid session token")
            })?;

        debug!("Session token verified for principal: {}", token_data.claims.id);
        Ok(token_data.claims)
    }
}
