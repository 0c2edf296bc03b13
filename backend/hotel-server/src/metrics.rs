use metrics::counter;

/// Counters for the authentication flow. Nothing is exported unless the
/// binary installs a recorder.
#[derive(Debug, Clone)]
pub struct AuthMetrics {
    prefix: &'static str,
}

impl AuthMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "hotel.auth",
        }
    }

    /// Record a completed registration
    pub fn registration(&self) {
        counter!(format!("{}.registrations", self.prefix)).increment(1);
    }

    /// Record a login attempt by outcome (`success`, `invalid_credentials`)
    pub fn login(&self, outcome: &str) {
        counter!(format!("{}.logins", self.prefix)).increment(1);
        counter!(format!("{}.logins.{}", self.prefix, outcome)).increment(1);
    }

    /// Record a request stopped by the auth pipeline
    pub fn rejection(&self, reason: &str) {
        counter!(format!("{}.rejections", self.prefix)).increment(1);
        counter!(format!("{}.rejections.{}", self.prefix, reason.to_lowercase())).increment(1);
    }

    /// Record a request refused by a rate limiter (`general`, `auth`)
    pub fn rate_limited(&self, scope: &str) {
        counter!(format!("{}.rate_limited.{}", self.prefix, scope)).increment(1);
    }

    /// Record a token issued by login, registration or refresh
    pub fn token_issued(&self) {
        counter!(format!("{}.tokens.issued", self.prefix)).increment(1);
    }
}

impl Default for AuthMetrics {
    fn default() -> Self {
        Self::new()
    }
}
