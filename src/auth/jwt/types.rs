//! Session token types and data structures

use crate::core::models::{Account, SuperAdmin, UserRole};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issues and verifies signed session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    /// Encoding key for signing tokens
    pub(super) encoding_key: EncodingKey,
    /// Decoding key for verifying tokens
    pub(super) decoding_key: DecodingKey,
    /// Signing algorithm
    pub(super) algorithm: Algorithm,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &self.algorithm)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

/// Claim set embedded in a session token
///
/// Tokens carry no expiry claim; session lifetime management is outside this
/// service's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (account or administrator ID)
    pub id: Uuid,
    /// Principal role
    pub role: String,
    /// Tenant association, absent for administrators
    #[serde(rename = "collegeId", skip_serializing_if = "Option::is_none")]
    pub college_id: Option<Uuid>,
}

impl SessionClaims {
    /// Claims for a regular account session
    pub fn for_account(account: &Account) -> Self {
        Self {
            id: account.id,
            role: account.role.to_string(),
            college_id: Some(account.college_id),
        }
    }

    /// Claims for an administrator session (no tenant claim)
    pub fn for_admin(admin: &SuperAdmin) -> Self {
        Self {
            id: admin.id,
            role: UserRole::SuperAdmin.to_string(),
            college_id: None,
        }
    }
}
