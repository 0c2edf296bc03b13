pub mod auth;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod field_error;
pub mod users;
pub mod validation;
