// src/api/mod.rs
//! Notion API interaction: the transport seam, response parsing, and the
//! per-resource services.
//!
//! Services depend on [`NotionTransport`], never on HTTP details, so they
//! can run against an in-memory transport in tests. The reqwest-backed
//! implementation lives in [`client`].

pub mod blocks;
pub mod client;
pub mod databases;
pub mod pages;
pub mod pagination;
pub mod parser;
pub mod search;
mod types;
pub mod users;

use crate::error::{Error, Result};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// The ability to exchange one request with the Notion API.
///
/// This is the fundamental algebra for API interaction: a verb, a path
/// relative to the versioned base URL, optional query pairs, and an
/// optional JSON body, answered with raw response text. The parser owns
/// all interpretation of that text.
#[async_trait::async_trait]
pub trait NotionTransport: Send + Sync {
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<ApiResponse<String>>;
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub url: String,
}

/// JSON-encode a request body, mapping serde failures into this crate's
/// error vocabulary.
pub(crate) fn encode_body<T: Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).map_err(|source| Error::Serialization { source })
}

// Re-export the public interface
pub use client::NotionHttpClient;
pub use types::{NotionErrorBody, PaginatedResponse};
