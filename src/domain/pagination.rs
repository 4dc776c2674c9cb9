//! Shared pagination contract for all list endpoints.
//!
//! Every listing (catalog, search, per-book reviews) accepts the same
//! `page`/`limit` query parameters and returns the same metadata block.

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw `page`/`limit` query parameters.
///
/// Parsing is lenient on purpose: a missing, non-numeric or non-positive
/// value falls back to the default instead of rejecting the request.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "lenient_int")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub limit: Option<i64>,
}

impl PageParams {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self { page, limit }
    }

    /// 1-indexed page, clamped to 1
    pub fn page(&self) -> u64 {
        match self.page {
            Some(p) if p > 0 => p as u64,
            _ => DEFAULT_PAGE,
        }
    }

    /// Page size; no upper bound is enforced
    pub fn limit(&self) -> u64 {
        match self.limit {
            Some(l) if l > 0 => l as u64,
            _ => DEFAULT_LIMIT,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page() - 1) * self.limit()
    }
}

/// Metadata block returned alongside every page of results.
/// `total` counts all matching records, not just the returned page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(params: PageParams, total: u64) -> Self {
        let limit = params.limit();
        Self {
            page: params.page(),
            limit,
            total,
            pages: total.div_ceil(limit),
        }
    }
}

// Query strings arrive as text; accept anything and keep only values that
// parse as integers so `?page=abc` degrades to the default.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<i64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_and_clamping() {
        assert_eq!(PageParams::new(None, None).page(), 1);
        assert_eq!(PageParams::new(Some(0), None).page(), 1);
        assert_eq!(PageParams::new(Some(-3), None).page(), 1);
        assert_eq!(PageParams::new(Some(7), None).page(), 7);
    }

    #[test]
    fn limit_defaults() {
        assert_eq!(PageParams::new(None, None).limit(), 10);
        assert_eq!(PageParams::new(None, Some(0)).limit(), 10);
        assert_eq!(PageParams::new(None, Some(-1)).limit(), 10);
        assert_eq!(PageParams::new(None, Some(25)).limit(), 25);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PageParams::new(Some(1), Some(10)).offset(), 0);
        assert_eq!(PageParams::new(Some(3), Some(10)).offset(), 20);
        assert_eq!(PageParams::new(None, Some(5)).offset(), 0);
    }

    #[test]
    fn pages_is_ceil_of_total_over_limit() {
        assert_eq!(Pagination::new(PageParams::new(None, None), 0).pages, 0);
        assert_eq!(Pagination::new(PageParams::new(None, None), 3).pages, 1);
        assert_eq!(Pagination::new(PageParams::new(None, None), 10).pages, 1);
        assert_eq!(Pagination::new(PageParams::new(None, None), 11).pages, 2);
        assert_eq!(Pagination::new(PageParams::new(None, Some(3)), 10).pages, 4);
    }

    #[test]
    fn pagination_reports_requested_page_even_past_the_end() {
        let meta = Pagination::new(PageParams::new(Some(5), Some(10)), 3);
        assert_eq!(meta.page, 5);
        assert_eq!(meta.total, 3);
        assert_eq!(meta.pages, 1);
    }
}
