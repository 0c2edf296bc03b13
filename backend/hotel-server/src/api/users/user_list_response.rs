use crate::UserDto;

use serde::Serialize;

/// `dados` of GET /api/usuarios
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub usuarios: Vec<UserDto>,
    pub total: u64,
    pub pagina: u32,
    pub limite: u32,
    #[serde(rename = "totalPaginas")]
    pub total_paginas: u64,
}
