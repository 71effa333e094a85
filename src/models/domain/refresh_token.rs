use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Stored refresh token. Only the SHA-256 hash of the token string is
/// persisted; the raw token lives in the client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RefreshToken {
    pub id: String,
    pub user_id: String,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    pub fn new(user_id: &str, raw_token: &str, expiration_hours: i64) -> Self {
        RefreshToken {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            token_hash: Self::hash_token(raw_token),
            expires_at: Utc::now() + Duration::hours(expiration_hours),
            revoked: false,
            created_at: Some(Utc::now()),
        }
    }

    pub fn hash_token(raw_token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw_token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }

    pub fn is_usable(&self) -> bool {
        !self.revoked && !self.is_expired()
    }
}
