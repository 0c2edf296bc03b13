//! One-way password hashing with bcrypt.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Salted, adaptive password hasher.
///
/// The work factor is fixed at construction from configuration. Hashing at
/// the default cost takes hundreds of milliseconds, so async callers should
/// use [`CredentialHasher::hash_async`] / [`CredentialHasher::verify_async`],
/// which move the work onto tokio's blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password. Output is always 60 characters.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        if plaintext.is_empty() {
            return Err(AuthError::InvalidInput {
                message: "Senha é obrigatória".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        bcrypt::hash(plaintext, self.cost).map_err(|source| AuthError::Hashing {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed stored hash counts as a mismatch.
    pub fn verify(&self, plaintext: &str, credential_hash: &str) -> bool {
        match bcrypt::verify(plaintext, credential_hash) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("Stored credential hash could not be parsed: {}", e);
                false
            }
        }
    }

    #[track_caller]
    pub fn hash_async(
        &self,
        plaintext: String,
    ) -> impl Future<Output = AuthErrorResult<String>> + Send + 'static {
        let hasher = *self;
        let location = ErrorLocation::from(Location::caller());
        async move {
            tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
                .await
                .map_err(|e| AuthError::BlockingTask {
                    message: e.to_string(),
                    location,
                })?
        }
    }

    #[track_caller]
    pub fn verify_async(
        &self,
        plaintext: String,
        credential_hash: String,
    ) -> impl Future<Output = AuthErrorResult<bool>> + Send + 'static {
        let hasher = *self;
        let location = ErrorLocation::from(Location::caller());
        async move {
            tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &credential_hash))
                .await
                .map_err(|e| AuthError::BlockingTask {
                    message: e.to_string(),
                    location,
                })
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}
