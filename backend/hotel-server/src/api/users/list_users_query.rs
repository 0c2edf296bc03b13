use crate::api::validation::{validate_limite, validate_pagina};

use serde::Deserialize;
use validator::Validate;

/// Query parameters for GET /api/usuarios
///
/// Kept as strings so a non-numeric value is a field error, not a
/// rejected query string.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListUsersQuery {
    #[validate(custom(function = "validate_pagina"))]
    pub pagina: Option<String>,
    #[validate(custom(function = "validate_limite"))]
    pub limite: Option<String>,
}
