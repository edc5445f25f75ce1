//! Pagination metadata for the link-management table.

/// Page position within the full link list, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total: i64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    /// Metadata for a single page holding everything.
    pub fn single(total: i64, per_page: u32) -> Self {
        Self {
            current_page: 1,
            per_page,
            total,
            total_pages: 1,
            has_next: false,
            has_prev: false,
        }
    }
}
