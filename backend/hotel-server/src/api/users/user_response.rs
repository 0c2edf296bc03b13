use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub usuario: UserDto,
}
