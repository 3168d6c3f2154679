// src/lib.rs
//! notion-sdk — a typed async client for the Notion REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `Error`, `NotionErrorCode`, `ValidationError`
//! - **Configuration** — `NotionConfig`
//! - **Domain model** — `Block`, `BlockContent`, `Page`, `Database`, `User`
//! - **Domain types** — `PageId`, `BlockId`, `ApiKey`, `Color`
//! - **API client** — `NotionClient`, the per-resource services, parsers
//!
//! The heart of the crate is the [`Block`] envelope and its codec: Notion
//! serializes each block's payload under a key named after the block's
//! `type` string, and `Block` owns the explicit dispatch between that wire
//! shape and the typed [`BlockContent`] variants.

mod api;
mod client;
mod config;
mod error;
mod model;
mod types;

// --- Error Handling ---
pub use crate::error::{Error, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{NotionConfig, DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION};

// --- Domain Model ---
pub use crate::model::{
    plain_text_of, Annotations, Block, BlockContent, BlockType, CodeContent, Database,
    DatabaseQuery, EquationExpression, ExternalFile, FileObject, HeadingContent, ImageContent,
    Link, NotionFile, Page, Parent, PersonDetails, RichText, RichTextKind, SearchResult,
    TextBlockContent, TextContent, ToDoContent, User,
};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, BlockId, BlockMarker, Color, DatabaseId, DatabaseMarker, Id, PageId, PageMarker,
    UserId, UserMarker, ValidatedUrl,
};

// --- API Client ---
pub use crate::api::{
    blocks::NotionBlockService,
    databases::NotionDatabaseService,
    pages::NotionPageService,
    pagination::{fetch_all_pages, DEFAULT_PAGE_SIZE, MAX_FETCH_PAGES},
    parser::{parse_api_response, parse_block_response},
    search::{NotionSearchService, SearchFilter, SearchRequest, SearchSort},
    users::NotionUserService,
    ApiResponse, NotionErrorBody, NotionHttpClient, NotionTransport, PaginatedResponse,
};
pub use crate::client::NotionClient;
