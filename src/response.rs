use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::CatalogPage;

/// Pagination block attached to list responses.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct PageMeta {
    pub page: usize,
    pub per_page: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl From<&CatalogPage> for PageMeta {
    fn from(page: &CatalogPage) -> Self {
        Self {
            page: page.page,
            per_page: page.per_page,
            total_count: page.total_count,
            total_pages: page.total_pages,
        }
    }
}
