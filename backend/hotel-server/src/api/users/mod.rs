pub mod list_users_query;
pub mod update_user_request;
pub mod user_dto;
pub mod user_list_response;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
