mod authenticated_user;
mod self_only;
mod valid_json;
