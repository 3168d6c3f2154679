// src/api/types.rs
//! Wire envelopes shared by every endpoint.

use serde::Deserialize;

/// Generic paginated response from the Notion API. Every list endpoint
/// (children, query, search, users) returns this envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Error payload Notion returns on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default)]
    pub object: Option<String>,
    pub status: u16,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}
