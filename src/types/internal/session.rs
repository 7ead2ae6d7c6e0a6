use chrono::{DateTime, Utc};

use crate::types::db::SessionToken;

/// A session issued to a user
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SessionToken,
    pub expires_at: DateTime<Utc>,
}
