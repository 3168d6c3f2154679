// src/api/parser.rs
//! Turns raw response text into typed results or typed failures.
//!
//! All JSON interpretation lives here: the transport hands over text plus
//! status, and this module decides between a decoded value, a typed Notion
//! API error, and a deserialization failure carrying the offending body.

use super::types::NotionErrorBody;
use super::ApiResponse;
use crate::error::{Error, NotionErrorCode, Result};
use crate::model::Block;
use reqwest::StatusCode;

/// Parse any Notion API response into the expected type.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

/// Parse a single-block response through the envelope codec, so malformed
/// envelopes keep their decode-error identity instead of degrading into
/// generic serde messages.
pub fn parse_block_response(result: ApiResponse<String>) -> Result<Block> {
    if result.status.is_success() {
        Block::from_json(&result.data)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        let preview = if body.len() > 500 {
            // The cutoff may land inside a multibyte char; back up to a boundary.
            let mut cut = 500;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}...", &body[..cut])
        } else {
            body.to_string()
        };

        Error::Deserialization {
            source: e,
            body: preview,
        }
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> Error {
    // A well-formed Notion error body gives us the typed code vocabulary.
    if let Ok(error_body) = serde_json::from_str::<NotionErrorBody>(body) {
        return Error::Api {
            status: error_body.status,
            code: NotionErrorCode::from_api_response(&error_body.code),
            message: error_body.message,
            request_id: error_body.request_id,
        };
    }

    // Otherwise classify the bare HTTP status (e.g. a gateway's HTML 502).
    Error::Api {
        status: status.as_u16(),
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        request_id: None,
    }
}
