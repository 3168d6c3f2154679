// src/api/pagination.rs
//! Cursor loop shared by every list endpoint.

use super::types::PaginatedResponse;
use crate::error::Result;

/// Page size requested from list endpoints; the API maximum.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Hard guard on cursor loops so a misbehaving `has_more` can never spin
/// forever. At the default page size this is 100k items.
pub const MAX_FETCH_PAGES: u32 = 1_000;

/// Fetches every page of a cursored listing.
///
/// Calls `fetch_fn(page_size, cursor)` repeatedly, stitching `results`
/// together until `has_more` goes false, the cursor disappears, or
/// `max_pages` is reached.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_fn: F, max_pages: Option<u32>) -> Result<Vec<T>>
where
    T: Send + 'static,
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;
    let limit = max_pages.unwrap_or(MAX_FETCH_PAGES);

    loop {
        if pages_fetched >= limit {
            log::debug!("Reached maximum page limit: {}", limit);
            break;
        }

        let response = fetch_fn(DEFAULT_PAGE_SIZE, cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor.clone();
        all_items.extend(response.results);
        pages_fetched += 1;

        if !has_more || cursor.is_none() {
            break;
        }
    }

    Ok(all_items)
}
