// src/api/databases.rs
//! Database operations: retrieve, create, update, query.

use super::{encode_body, parser, NotionTransport, PaginatedResponse};
use crate::error::Result;
use crate::model::{Database, DatabaseQuery, Page, Parent, RichText};
use crate::types::DatabaseId;
use reqwest::Method;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Service for the `databases` endpoints.
#[derive(Clone)]
pub struct NotionDatabaseService {
    transport: Arc<dyn NotionTransport>,
}

impl NotionDatabaseService {
    pub fn new(transport: Arc<dyn NotionTransport>) -> Self {
        Self { transport }
    }

    /// Fetches a database's structure (not its rows) by id.
    pub async fn retrieve(&self, database_id: &DatabaseId) -> Result<Database> {
        let path = format!("databases/{}", database_id.to_hyphenated());
        let response = self
            .transport
            .exchange(Method::GET, &path, &[], None)
            .await?;
        parser::parse_api_response(response)
    }

    /// Creates a database under the given parent. The title is wrapped
    /// into a single plain rich-text run.
    pub async fn create(
        &self,
        parent: Parent,
        title: &str,
        properties: Map<String, Value>,
    ) -> Result<Database> {
        let mut body = Map::new();
        body.insert("parent".to_owned(), encode_body(&parent)?);
        body.insert("title".to_owned(), encode_body(&RichText::list_of(title))?);
        body.insert("properties".to_owned(), Value::Object(properties));

        let response = self
            .transport
            .exchange(Method::POST, "databases", &[], Some(Value::Object(body)))
            .await?;
        parser::parse_api_response(response)
    }

    /// Updates a database's title and/or property schema. Only the
    /// populated arguments are sent.
    pub async fn update(
        &self,
        database_id: &DatabaseId,
        title: Option<&str>,
        properties: Option<Map<String, Value>>,
    ) -> Result<Database> {
        let path = format!("databases/{}", database_id.to_hyphenated());

        let mut body = Map::new();
        if let Some(title) = title {
            body.insert("title".to_owned(), encode_body(&RichText::list_of(title))?);
        }
        if let Some(properties) = properties {
            body.insert("properties".to_owned(), Value::Object(properties));
        }

        let response = self
            .transport
            .exchange(Method::PATCH, &path, &[], Some(Value::Object(body)))
            .await?;
        parser::parse_api_response(response)
    }

    /// Runs one page of a query against a database's rows.
    pub async fn query(
        &self,
        database_id: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<PaginatedResponse<Page>> {
        let path = format!("databases/{}/query", database_id.to_hyphenated());
        let response = self
            .transport
            .exchange(Method::POST, &path, &[], Some(encode_body(query)?))
            .await?;
        parser::parse_api_response(response)
    }
}
