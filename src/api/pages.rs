// src/api/pages.rs
//! Page operations: retrieve, create, update, archive.

use super::{encode_body, parser, NotionTransport};
use crate::error::Result;
use crate::model::{Block, Page, Parent};
use crate::types::PageId;
use reqwest::Method;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Service for the `pages` endpoints.
#[derive(Clone)]
pub struct NotionPageService {
    transport: Arc<dyn NotionTransport>,
}

impl NotionPageService {
    pub fn new(transport: Arc<dyn NotionTransport>) -> Self {
        Self { transport }
    }

    /// Fetches a page by id.
    pub async fn retrieve(&self, page_id: &PageId) -> Result<Page> {
        let path = format!("pages/{}", page_id.to_hyphenated());
        let response = self
            .transport
            .exchange(Method::GET, &path, &[], None)
            .await?;
        parser::parse_api_response(response)
    }

    /// Creates a page under the given parent. Properties must match the
    /// parent database's schema when the parent is a database.
    pub async fn create(
        &self,
        parent: Parent,
        properties: Map<String, Value>,
        children: Option<Vec<Block>>,
    ) -> Result<Page> {
        let mut body = Map::new();
        body.insert("parent".to_owned(), encode_body(&parent)?);
        body.insert("properties".to_owned(), Value::Object(properties));
        if let Some(children) = &children {
            body.insert("children".to_owned(), encode_body(children)?);
        }

        let response = self
            .transport
            .exchange(Method::POST, "pages", &[], Some(Value::Object(body)))
            .await?;
        parser::parse_api_response(response)
    }

    /// Updates the given properties on a page; unnamed properties keep
    /// their values.
    pub async fn update(&self, page_id: &PageId, properties: Map<String, Value>) -> Result<Page> {
        let path = format!("pages/{}", page_id.to_hyphenated());
        let body = json!({ "properties": properties });
        let response = self
            .transport
            .exchange(Method::PATCH, &path, &[], Some(body))
            .await?;
        parser::parse_api_response(response)
    }

    /// Sets the archived flag directly.
    pub async fn set_archived(&self, page_id: &PageId, archived: bool) -> Result<Page> {
        let path = format!("pages/{}", page_id.to_hyphenated());
        let body = json!({ "archived": archived });
        let response = self
            .transport
            .exchange(Method::PATCH, &path, &[], Some(body))
            .await?;
        parser::parse_api_response(response)
    }

    /// Moves the page to the trash.
    pub async fn archive(&self, page_id: &PageId) -> Result<Page> {
        self.set_archived(page_id, true).await
    }

    /// Restores the page from the trash.
    pub async fn unarchive(&self, page_id: &PageId) -> Result<Page> {
        self.set_archived(page_id, false).await
    }
}
