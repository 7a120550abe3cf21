use chrono::{DateTime, Utc};

/// Cached bearer token and the instant it stops being valid.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    /// Usable only while `expires_at` is strictly in the future.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(Utc::now())
    }
}

// token value stays out of logs
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
