pub mod authenticated_user;
pub mod self_only;
pub mod valid_json;
pub mod valid_query;
