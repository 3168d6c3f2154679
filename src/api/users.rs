// src/api/users.rs
//! User operations: list the workspace, fetch one user, identify the bot.

use super::{parser, NotionTransport, PaginatedResponse};
use crate::error::Result;
use crate::model::User;
use crate::types::UserId;
use reqwest::Method;
use std::sync::Arc;

/// Service for the `users` endpoints.
#[derive(Clone)]
pub struct NotionUserService {
    transport: Arc<dyn NotionTransport>,
}

impl NotionUserService {
    pub fn new(transport: Arc<dyn NotionTransport>) -> Self {
        Self { transport }
    }

    /// Lists one page of the workspace's users.
    pub async fn list(
        &self,
        cursor: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<PaginatedResponse<User>> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("start_cursor".to_owned(), cursor.to_owned()));
        }
        if let Some(page_size) = page_size {
            query.push(("page_size".to_owned(), page_size.to_string()));
        }

        let response = self
            .transport
            .exchange(Method::GET, "users", &query, None)
            .await?;
        parser::parse_api_response(response)
    }

    /// Fetches a user by id.
    pub async fn retrieve(&self, user_id: &UserId) -> Result<User> {
        let path = format!("users/{}", user_id.to_hyphenated());
        let response = self
            .transport
            .exchange(Method::GET, &path, &[], None)
            .await?;
        parser::parse_api_response(response)
    }

    /// Fetches the bot user the API key belongs to.
    pub async fn me(&self) -> Result<User> {
        let response = self
            .transport
            .exchange(Method::GET, "users/me", &[], None)
            .await?;
        parser::parse_api_response(response)
    }
}
