/// Pagination support for queries
///
/// Standard pagination model used across all bounded contexts
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries (1-based page numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages: total_pages(total_count, params.page_size),
        }
    }

    /// Slice an already materialised collection into the requested page.
    pub fn from_vec(all: Vec<T>, params: &PaginationParams) -> Self {
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(params.offset())
            .take(params.limit())
            .collect();
        Self::new(items, total_count, params)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_for_first_page() {
        assert_eq!(PaginationParams::new(1, 20).offset(), 0);
        assert_eq!(PaginationParams::new(3, 10).offset(), 20);
        // page 0 is treated like page 1
        assert_eq!(PaginationParams::new(0, 10).offset(), 0);
    }

    #[test]
    fn from_vec_slices_and_counts() {
        let result = PaginatedResult::from_vec((1..=7).collect::<Vec<_>>(), &PaginationParams::new(2, 3));
        assert_eq!(result.items, vec![4, 5, 6]);
        assert_eq!(result.total_count, 7);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let result = PaginatedResult::from_vec(vec![1, 2], &PaginationParams::new(5, 10));
        assert!(result.is_empty());
        assert_eq!(result.total_count, 2);
    }
}
