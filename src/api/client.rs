// src/api/client.rs
//! Pure HTTP transport for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication headers,
//! URL joining, and body encoding. No parsing, no business logic.

use super::{ApiResponse, NotionTransport};
use crate::config::NotionConfig;
use crate::error::{Error, Result};
use reqwest::{header, Client, Method, Response};
use serde_json::Value;

/// A thin wrapper around a pooled reqwest Client for Notion API requests.
///
/// Construction does all the one-time work: default headers (bearer auth,
/// API version, content type) and the configured timeouts. Cloning shares
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a transport from the given configuration.
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(Self::create_headers(config)?)
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// Creates the default headers for Notion API requests. A key or
    /// version string that is not valid header text fails here, once,
    /// instead of on every call.
    fn create_headers(config: &NotionConfig) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", config.api_key.as_str());
        let mut auth_value =
            header::HeaderValue::from_str(&auth_header).map_err(|err| Error::InvalidHeader {
                message: format!("API key is not valid header text: {}", err),
            })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_str(&config.notion_version).map_err(|err| {
                Error::InvalidHeader {
                    message: format!("Notion version is not valid header text: {}", err),
                }
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl NotionTransport for NotionHttpClient {
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<ApiResponse<String>> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        extract_response_text(response).await
    }
}

/// Extracts the response body as text along with status and final URL,
/// the shape the parser works from.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiKey;

    fn test_config() -> NotionConfig {
        NotionConfig::new(ApiKey::new("secret_0123456789abcdef0123").unwrap())
    }

    #[test]
    fn construction_builds_headers_once() {
        assert!(NotionHttpClient::new(&test_config()).is_ok());
    }

    #[test]
    fn version_with_invalid_header_text_fails_at_construction() {
        let config = test_config().with_notion_version("2022\n06-28");
        let err = NotionHttpClient::new(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }

    #[test]
    fn base_url_has_no_trailing_slash() {
        let config = test_config();
        let client = NotionHttpClient::new(&config).unwrap();
        assert!(!client.base_url.ends_with('/'));
    }
}
