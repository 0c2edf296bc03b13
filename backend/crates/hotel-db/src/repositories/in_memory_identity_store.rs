//! Identity store kept in process memory.
//!
//! Backs the server when `database.url = "memory"` and drives the HTTP
//! tests. Uniqueness is checked under the write lock, which gives the same
//! one-winner outcome the partial unique indexes give in Postgres.

use crate::{DbError, IdentityStore, Result as DbErrorResult};

use hotel_core::{Identity, IdentityChanges, IdentityPage, NewIdentity, PageRequest, normalize_email};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use tokio::sync::RwLock;
use uuid::Uuid;

const EMAIL_CONSTRAINT: &str = "usuarios_email_live_key";
const CPF_CONSTRAINT: &str = "usuarios_cpf_live_key";

#[derive(Clone, Default)]
pub struct InMemoryIdentityStore {
    records: Arc<RwLock<HashMap<Uuid, Identity>>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Administrative lookup that also sees soft-deleted records
    pub async fn find_including_deleted(&self, id: Uuid) -> Option<Identity> {
        self.records.read().await.get(&id).cloned()
    }

    /// Number of records, deleted ones included
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    #[track_caller]
    fn check_unique(
        records: &HashMap<Uuid, Identity>,
        except: Option<Uuid>,
        email: Option<&str>,
        national_id: Option<&str>,
    ) -> DbErrorResult<()> {
        let location = Location::caller();
        for other in records.values() {
            if !other.is_live() || Some(other.id) == except {
                continue;
            }
            if email.is_some_and(|email| other.email == email) {
                return Err(DbError::Conflict {
                    constraint: Some(EMAIL_CONSTRAINT.to_string()),
                    message: "duplicate email among active identities".to_string(),
                    location: ErrorLocation::from(location),
                });
            }
            if national_id.is_some_and(|cpf| other.national_id.as_deref() == Some(cpf)) {
                return Err(DbError::Conflict {
                    constraint: Some(CPF_CONSTRAINT.to_string()),
                    message: "duplicate cpf among active identities".to_string(),
                    location: ErrorLocation::from(location),
                });
            }
        }

        Ok(())
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let email = normalize_email(email);
        let records = self.records.read().await;

        Ok(records
            .values()
            .find(|identity| identity.is_live() && identity.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let records = self.records.read().await;

        Ok(records.get(&id).filter(|identity| identity.is_live()).cloned())
    }

    async fn create(&self, fields: NewIdentity) -> DbErrorResult<Identity> {
        let identity = fields.into_identity();
        let mut records = self.records.write().await;

        Self::check_unique(
            &records,
            None,
            Some(&identity.email),
            identity.national_id.as_deref(),
        )?;

        records.insert(identity.id, identity.clone());
        log::debug!("Created identity {}", identity.id);

        Ok(identity)
    }

    async fn update(&self, id: Uuid, changes: IdentityChanges) -> DbErrorResult<Identity> {
        let mut records = self.records.write().await;

        let is_live = records.get(&id).is_some_and(Identity::is_live);
        if !is_live {
            return Err(DbError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let email = changes.email.as_deref().map(normalize_email);
        Self::check_unique(
            &records,
            Some(id),
            email.as_deref(),
            changes.new_national_id(),
        )?;

        let identity = records.get_mut(&id).ok_or_else(|| DbError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })?;
        changes.apply_to(identity);

        Ok(identity.clone())
    }

    async fn soft_delete(&self, id: Uuid, deleted_by: Uuid) -> DbErrorResult<()> {
        let mut records = self.records.write().await;

        let identity = records.get_mut(&id).ok_or_else(|| DbError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })?;

        identity.active = false;
        identity.deleted_at = Some(Utc::now());
        identity.deleted_by = Some(deleted_by);

        log::info!("Identity {} soft deleted by {}", id, deleted_by);

        Ok(())
    }

    async fn list(&self, page: PageRequest) -> DbErrorResult<IdentityPage> {
        let records = self.records.read().await;

        let mut live: Vec<&Identity> = records.values().filter(|i| i.is_live()).collect();
        live.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = live.len() as u64;
        let items = live
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size() as usize)
            .cloned()
            .collect();

        Ok(IdentityPage { items, total })
    }
}
