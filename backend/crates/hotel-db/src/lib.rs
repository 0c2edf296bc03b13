pub mod connection;
pub mod error;
pub mod identity_store;
pub mod repositories;


pub use connection::pg_connection::{connect_pool, run_migrations};
pub use error::{DbError, Result};
pub use identity_store::IdentityStore;
pub use repositories::in_memory_identity_store::InMemoryIdentityStore;
pub use repositories::pg_identity_store::PgIdentityStore;
