// src/client.rs
//! The client facade: one configured transport shared by every service.

use crate::api::blocks::NotionBlockService;
use crate::api::client::NotionHttpClient;
use crate::api::databases::NotionDatabaseService;
use crate::api::pages::NotionPageService;
use crate::api::search::NotionSearchService;
use crate::api::users::NotionUserService;
use crate::api::NotionTransport;
use crate::config::NotionConfig;
use crate::error::Result;
use std::sync::Arc;

/// Entry point for talking to the Notion API.
///
/// Builds the HTTP transport once; every service accessor shares it, so
/// accessors are cheap to call at the use site.
#[derive(Clone)]
pub struct NotionClient {
    transport: Arc<dyn NotionTransport>,
}

impl NotionClient {
    /// Builds a client from explicit configuration.
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let transport = NotionHttpClient::new(config)?;
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Builds a client from the `NOTION_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Self::new(&NotionConfig::from_env()?)
    }

    /// Wraps an existing transport. This is the seam for wrapping the
    /// HTTP client with retry or rate-limit middleware, and for running
    /// services against a test transport.
    pub fn from_transport(transport: Arc<dyn NotionTransport>) -> Self {
        Self { transport }
    }

    pub fn pages(&self) -> NotionPageService {
        NotionPageService::new(Arc::clone(&self.transport))
    }

    pub fn databases(&self) -> NotionDatabaseService {
        NotionDatabaseService::new(Arc::clone(&self.transport))
    }

    pub fn blocks(&self) -> NotionBlockService {
        NotionBlockService::new(Arc::clone(&self.transport))
    }

    pub fn search(&self) -> NotionSearchService {
        NotionSearchService::new(Arc::clone(&self.transport))
    }

    pub fn users(&self) -> NotionUserService {
        NotionUserService::new(Arc::clone(&self.transport))
    }
}
