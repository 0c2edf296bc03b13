use chrono::{DateTime, Utc};

/// A freshly signed bearer token and its expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
