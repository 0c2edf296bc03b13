use crate::UserDto;

use serde::Serialize;

/// `dados` of a successful register or login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub usuario: UserDto,
    pub token: String,
}
