// src/api/search.rs
//! Workspace search across pages and databases.

use super::{encode_body, pagination, parser, NotionTransport, PaginatedResponse};
use crate::error::Result;
use crate::model::SearchResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Restricts search hits to a single object kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub value: String,
    pub property: String,
}

impl SearchFilter {
    pub fn pages() -> Self {
        Self {
            value: "page".to_owned(),
            property: "object".to_owned(),
        }
    }

    pub fn databases() -> Self {
        Self {
            value: "database".to_owned(),
            property: "object".to_owned(),
        }
    }
}

/// Orders search hits by last-edited time, the only sort Notion offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSort {
    pub direction: String,
    pub timestamp: String,
}

impl SearchSort {
    pub fn ascending() -> Self {
        Self {
            direction: "ascending".to_owned(),
            timestamp: "last_edited_time".to_owned(),
        }
    }

    pub fn descending() -> Self {
        Self {
            direction: "descending".to_owned(),
            timestamp: "last_edited_time".to_owned(),
        }
    }
}

/// Request body for `POST search`. Only populated fields are sent; an
/// empty request matches everything the integration can see.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn filter(mut self, filter: SearchFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sort(mut self, sort: SearchSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Service for the `search` endpoint.
#[derive(Clone)]
pub struct NotionSearchService {
    transport: Arc<dyn NotionTransport>,
}

impl NotionSearchService {
    pub fn new(transport: Arc<dyn NotionTransport>) -> Self {
        Self { transport }
    }

    /// Runs one page of a search.
    pub async fn search(&self, request: &SearchRequest) -> Result<PaginatedResponse<SearchResult>> {
        let response = self
            .transport
            .exchange(Method::POST, "search", &[], Some(encode_body(request)?))
            .await?;
        parser::parse_api_response(response)
    }

    /// Collects every hit for a plain text query, walking all cursor pages.
    pub async fn search_all(&self, query: impl Into<String>) -> Result<Vec<SearchResult>> {
        let query = query.into();
        pagination::fetch_all_pages(
            |page_size, cursor| {
                let query = query.clone();
                async move {
                    let mut request = SearchRequest::new().query(query).page_size(page_size);
                    if let Some(cursor) = cursor {
                        request = request.start_cursor(cursor);
                    }
                    self.search(&request).await
                }
            },
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_serializes_only_populated_fields() {
        let request = SearchRequest::new()
            .query("kale")
            .filter(SearchFilter::databases())
            .sort(SearchSort::descending());

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "kale",
                "filter": {"value": "database", "property": "object"},
                "sort": {"direction": "descending", "timestamp": "last_edited_time"}
            })
        );
    }

    #[test]
    fn empty_request_is_an_empty_object() {
        let value = serde_json::to_value(SearchRequest::new()).unwrap();
        assert_eq!(value, json!({}));
    }
}
