pub mod identity;
pub mod identity_changes;
pub mod identity_page;
pub mod new_identity;
pub mod page_request;
