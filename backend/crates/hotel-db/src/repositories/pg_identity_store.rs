//! Postgres-backed identity store.
//!
//! Uses runtime-checked queries so the crate builds without a live database.

use crate::{DbError, IdentityStore, Result as DbErrorResult};

use hotel_core::{Identity, IdentityChanges, IdentityPage, NewIdentity, PageRequest};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const IDENTITY_COLUMNS: &str = r#"id, nome, pronome, senha, email, telefone, data_nascimento, cpf, "timestamp", active, deleted_at, deleted_by"#;

const LIVE: &str = "active AND deleted_at IS NULL";

#[derive(Debug, FromRow)]
struct IdentityRow {
    id: Uuid,
    nome: String,
    pronome: Option<String>,
    senha: String,
    email: String,
    telefone: Option<String>,
    data_nascimento: Option<NaiveDate>,
    cpf: Option<String>,
    timestamp: DateTime<Utc>,
    active: bool,
    deleted_at: Option<DateTime<Utc>>,
    deleted_by: Option<Uuid>,
}

impl From<IdentityRow> for Identity {
    fn from(r: IdentityRow) -> Self {
        Self {
            id: r.id,
            email: r.email,
            credential_hash: r.senha,
            display_name: r.nome,
            pronoun: r.pronome,
            phone: r.telefone,
            birth_date: r.data_nascimento,
            national_id: r.cpf,
            active: r.active,
            created_at: r.timestamp,
            deleted_at: r.deleted_at,
            deleted_by: r.deleted_by,
        }
    }
}

#[derive(Clone)]
pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Administrative lookup that also sees soft-deleted records
    pub async fn find_including_deleted(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let sql = format!("SELECT {IDENTITY_COLUMNS} FROM usuarios WHERE id = $1");

        let row = sqlx::query_as::<_, IdentityRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Identity::from))
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let sql = format!(
            "SELECT {IDENTITY_COLUMNS} FROM usuarios WHERE lower(email) = lower($1) AND {LIVE}"
        );

        let row = sqlx::query_as::<_, IdentityRow>(&sql)
            .bind(email.trim())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Identity::from))
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let sql = format!("SELECT {IDENTITY_COLUMNS} FROM usuarios WHERE id = $1 AND {LIVE}");

        let row = sqlx::query_as::<_, IdentityRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Identity::from))
    }

    async fn create(&self, fields: NewIdentity) -> DbErrorResult<Identity> {
        let identity = fields.into_identity();
        let sql = format!(
            r#"
                INSERT INTO usuarios (
                    id, nome, pronome, senha, email, telefone, data_nascimento, cpf,
                    "timestamp", active
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE)
                RETURNING {IDENTITY_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, IdentityRow>(&sql)
            .bind(identity.id)
            .bind(&identity.display_name)
            .bind(&identity.pronoun)
            .bind(&identity.credential_hash)
            .bind(&identity.email)
            .bind(&identity.phone)
            .bind(identity.birth_date)
            .bind(&identity.national_id)
            .bind(identity.created_at)
            .fetch_one(&self.pool)
            .await?;

        log::debug!("Created identity {}", row.id);

        Ok(row.into())
    }

    async fn update(&self, id: Uuid, changes: IdentityChanges) -> DbErrorResult<Identity> {
        let email = changes.email.as_deref().map(hotel_core::normalize_email);
        // Nullable columns take a "touched" flag; touched with NULL clears them
        let sql = format!(
            r#"
                UPDATE usuarios SET
                    nome = COALESCE($2, nome),
                    pronome = CASE WHEN $3 THEN $4 ELSE pronome END,
                    email = COALESCE($5, email),
                    telefone = CASE WHEN $6 THEN $7 ELSE telefone END,
                    data_nascimento = CASE WHEN $8 THEN $9 ELSE data_nascimento END,
                    cpf = CASE WHEN $10 THEN $11 ELSE cpf END,
                    senha = COALESCE($12, senha)
                WHERE id = $1 AND {LIVE}
                RETURNING {IDENTITY_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, IdentityRow>(&sql)
            .bind(id)
            .bind(&changes.display_name)
            .bind(changes.pronoun.is_some())
            .bind(changes.pronoun.clone().flatten())
            .bind(&email)
            .bind(changes.phone.is_some())
            .bind(changes.phone.clone().flatten())
            .bind(changes.birth_date.is_some())
            .bind(changes.birth_date.flatten())
            .bind(changes.national_id.is_some())
            .bind(changes.new_national_id())
            .bind(&changes.credential_hash)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Identity::from).ok_or_else(|| DbError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn soft_delete(&self, id: Uuid, deleted_by: Uuid) -> DbErrorResult<()> {
        let result = sqlx::query(
            "UPDATE usuarios SET active = FALSE, deleted_at = $2, deleted_by = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(Utc::now())
        .bind(deleted_by)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::info!("Identity {} soft deleted by {}", id, deleted_by);

        Ok(())
    }

    async fn list(&self, page: PageRequest) -> DbErrorResult<IdentityPage> {
        let sql = format!(
            r#"
                SELECT {IDENTITY_COLUMNS} FROM usuarios
                WHERE {LIVE}
                ORDER BY "timestamp" DESC, id DESC
                LIMIT $1 OFFSET $2
            "#
        );

        let rows = sqlx::query_as::<_, IdentityRow>(&sql)
            .bind(i64::from(page.page_size()))
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM usuarios WHERE {LIVE}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .fetch_one(&self.pool)
            .await?;

        Ok(IdentityPage {
            items: rows.into_iter().map(Identity::from).collect(),
            total: total.max(0) as u64,
        })
    }
}
