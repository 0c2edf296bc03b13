//! Boundary between the auth core and whatever persists identities.

use crate::Result as DbErrorResult;

use hotel_core::{Identity, IdentityChanges, IdentityPage, NewIdentity, PageRequest};

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence of [`Identity`] records.
///
/// Every lookup is scoped to live records (`active` and not deleted).
/// Email uniqueness among live records is enforced by the store itself and
/// surfaces as [`DbError::Conflict`](crate::DbError::Conflict); callers must
/// not try to serialize registrations on their own.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>>;

    async fn create(&self, fields: NewIdentity) -> DbErrorResult<Identity>;

    /// Apply whitelisted changes to a live identity.
    /// `NotFound` if no live identity has this id.
    async fn update(&self, id: Uuid, changes: IdentityChanges) -> DbErrorResult<Identity>;

    /// Mark the identity inactive and stamp `deleted_at`/`deleted_by`.
    /// Calling it again re-stamps `deleted_at`. `NotFound` only if no record
    /// with this id exists at all.
    async fn soft_delete(&self, id: Uuid, deleted_by: Uuid) -> DbErrorResult<()>;

    /// Live identities, newest first
    async fn list(&self, page: PageRequest) -> DbErrorResult<IdentityPage>;
}
