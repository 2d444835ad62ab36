//! Platform administrator identity
//!
//! Administrators live in their own principal namespace, disjoint from
//! regular accounts, and share the login entry point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform administrator record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuperAdmin {
    /// Administrator ID (UUID)
    pub id: Uuid,
    /// Full name
    pub full_name: String,
    /// Email address (unique within the admin namespace)
    pub email: String,
    /// Password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
