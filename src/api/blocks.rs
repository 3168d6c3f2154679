// src/api/blocks.rs
//! Block operations: retrieve, update, archive, and children handling.

use super::{encode_body, pagination, parser, NotionTransport, PaginatedResponse};
use crate::error::Result;
use crate::model::Block;
use crate::types::BlockId;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Service for the `blocks` endpoints.
#[derive(Clone)]
pub struct NotionBlockService {
    transport: Arc<dyn NotionTransport>,
}

impl NotionBlockService {
    pub fn new(transport: Arc<dyn NotionTransport>) -> Self {
        Self { transport }
    }

    /// Fetches a block by id.
    pub async fn retrieve(&self, block_id: &BlockId) -> Result<Block> {
        let path = format!("blocks/{}", block_id.to_hyphenated());
        let response = self
            .transport
            .exchange(Method::GET, &path, &[], None)
            .await?;
        parser::parse_block_response(response)
    }

    /// Updates a block in place with the given block's encoding. Detach
    /// the content first (`take_content`) to send a metadata-only patch.
    pub async fn update(&self, block_id: &BlockId, block: &Block) -> Result<Block> {
        let path = format!("blocks/{}", block_id.to_hyphenated());
        let body = block.to_value()?;
        let response = self
            .transport
            .exchange(Method::PATCH, &path, &[], Some(body))
            .await?;
        parser::parse_block_response(response)
    }

    /// Archives a block, Notion's spelling of delete.
    pub async fn archive(&self, block_id: &BlockId) -> Result<Block> {
        let path = format!("blocks/{}", block_id.to_hyphenated());
        let body = json!({ "archived": true });
        let response = self
            .transport
            .exchange(Method::PATCH, &path, &[], Some(body))
            .await?;
        parser::parse_block_response(response)
    }

    /// Fetches one page of a block's children.
    pub async fn children(
        &self,
        block_id: &BlockId,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<PaginatedResponse<Block>> {
        let path = format!("blocks/{}/children", block_id.to_hyphenated());

        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("start_cursor".to_owned(), cursor.to_owned()));
        }
        if let Some(page_size) = page_size {
            query.push(("page_size".to_owned(), page_size.to_string()));
        }

        let response = self
            .transport
            .exchange(Method::GET, &path, &query, None)
            .await?;
        parser::parse_api_response(response)
    }

    /// Fetches every child of a block, walking the cursor until Notion
    /// reports no more pages (bounded by the pagination guard).
    pub async fn all_children(&self, block_id: &BlockId) -> Result<Vec<Block>> {
        pagination::fetch_all_pages(
            |page_size, cursor| async move {
                self.children(block_id, cursor.as_deref(), Some(page_size))
                    .await
            },
            None,
        )
        .await
    }

    /// Appends the given blocks as children. Factory-built blocks carry no
    /// metadata, so each encodes to just its type key and payload.
    pub async fn append_children(
        &self,
        block_id: &BlockId,
        children: &[Block],
    ) -> Result<PaginatedResponse<Block>> {
        let path = format!("blocks/{}/children", block_id.to_hyphenated());
        let body = json!({ "children": encode_body(&children)? });
        let response = self
            .transport
            .exchange(Method::PATCH, &path, &[], Some(body))
            .await?;
        parser::parse_api_response(response)
    }

    /// Appends a single paragraph of plain text.
    pub async fn append_paragraph(
        &self,
        block_id: &BlockId,
        text: impl Into<String>,
    ) -> Result<PaginatedResponse<Block>> {
        self.append_children(block_id, &[Block::paragraph(text)])
            .await
    }

    /// Appends a single plain-text heading of the given level.
    pub async fn append_heading(
        &self,
        block_id: &BlockId,
        text: impl Into<String>,
        level: u8,
    ) -> Result<PaginatedResponse<Block>> {
        let heading = Block::heading(text, level)?;
        self.append_children(block_id, &[heading]).await
    }
}
