use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validated 1-based pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    #[track_caller]
    pub fn new(page: u32, page_size: u32) -> CoreErrorResult<Self> {
        if page < 1 {
            return Err(CoreError::Validation {
                message: "Página deve ser um número inteiro maior que 0".to_string(),
                field: Some("pagina".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(CoreError::Validation {
                message: format!("Limite deve ser um número entre 1 e {}", MAX_PAGE_SIZE),
                field: Some("limite".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// ceil(total / page_size)
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.page_size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
