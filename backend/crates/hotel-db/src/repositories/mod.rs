pub mod in_memory_identity_store;
pub mod pg_identity_store;
