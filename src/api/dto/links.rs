//! DTOs for listing and removing links.

use serde::Serialize;

use super::stats::StatsResponse;

/// Paginated list of registered links, newest first.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<StatsResponse>,
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: usize) -> Self {
        let total_pages =
            u32::try_from(total_items.div_ceil(page_size.max(1) as usize)).unwrap_or(u32::MAX);

        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

/// Confirmation of an administrative removal.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub message: String,
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginationMeta::new(1, 25, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(1, 25, 25).total_pages, 1);
        assert_eq!(PaginationMeta::new(1, 25, 26).total_pages, 2);
        assert_eq!(PaginationMeta::new(1, 10, 95).total_pages, 10);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_total_pages_saturates() {
        let meta = PaginationMeta::new(1, 1, u32::MAX as usize + 5);

        assert_eq!(meta.total_pages, u32::MAX);
        assert_eq!(meta.total_items, u32::MAX as usize + 5);
    }
}
