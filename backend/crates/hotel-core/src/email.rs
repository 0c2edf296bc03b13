/// Canonical form of an email address used as the login key.
///
/// Lookups, uniqueness checks and storage all go through this so that
/// `Ana@X.com ` and `ana@x.com` name the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
