pub mod email;
pub mod error;
pub mod models;


pub use email::normalize_email;
pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::identity_changes::IdentityChanges;
pub use models::identity_page::IdentityPage;
pub use models::new_identity::NewIdentity;
pub use models::page_request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
