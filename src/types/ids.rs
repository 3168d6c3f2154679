use super::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for Notion object IDs with phantom markers.
///
/// The wire format is a string either way; the marker keeps a page ID from
/// being handed to a block endpoint at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserMarker;

/// Type aliases for specific ID kinds
pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;
pub type DatabaseId = Id<DatabaseMarker>;
pub type UserId = Id<UserMarker>;

impl<T> Id<T> {
    /// Parse various Notion ID formats into a normalized ID.
    ///
    /// Accepts the raw 32-hex form, the hyphenated UUID form, and Notion
    /// URLs (both the `Title-<id>` and bare `/<id>` shapes). The stored
    /// value is always lowercase hex without hyphens.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_notion_id(input)?;
        Ok(Self {
            value: normalized,
            _phantom: PhantomData,
        })
    }

    /// Create an ID from a string taken off the wire (internal use).
    pub(crate) fn from_raw(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the ID with dashes for API endpoint paths.
    ///
    /// Only the normalized 32-hex form is dashed; values carried verbatim
    /// off the wire render as stored.
    pub fn to_hyphenated(&self) -> String {
        if self.value.len() == 32 && self.value.chars().all(|c| c.is_ascii_hexdigit()) {
            format!(
                "{}-{}-{}-{}-{}",
                &self.value[0..8],
                &self.value[8..12],
                &self.value[12..16],
                &self.value[16..20],
                &self.value[20..32]
            )
        } else {
            self.value.clone()
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Deserialization is tolerant: ids are normalized when they have a known
// shape, and carried verbatim otherwise, so an unfamiliar form coming off
// the wire is never a decode failure.
impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let normalized = normalize_notion_id(&value).unwrap_or(value);
        Ok(Self::from_raw(normalized))
    }
}

/// Normalize various Notion ID formats into lowercase 32-hex.
fn normalize_notion_id(input: &str) -> Result<String, ValidationError> {
    let cleaned = input.trim().trim_end_matches('/');

    // Hyphenated UUID form
    if let Ok(uuid) = Uuid::parse_str(cleaned) {
        return Ok(uuid.as_simple().to_string());
    }

    // Direct 32-char hex form
    if cleaned.len() == 32 && cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
        return Ok(cleaned.to_lowercase());
    }

    // URL forms
    if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
        return extract_id_from_url(cleaned);
    }

    Err(ValidationError::InvalidId(format!(
        "Could not parse Notion ID from: {}",
        input
    )))
}

/// Extract an ID from a Notion URL.
fn extract_id_from_url(url: &str) -> Result<String, ValidationError> {
    lazy_static::lazy_static! {
        static ref ID_REGEX: Regex = Regex::new(
            r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)"
        ).expect("Notion ID regex is statically valid");
    }

    if let Some(captures) = ID_REGEX.captures(url) {
        if let Some(id_match) = captures.get(1) {
            return Ok(id_match.as_str().replace('-', "").to_lowercase());
        }
    }

    Err(ValidationError::InvalidId(format!(
        "No valid ID found in URL: {}",
        url
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direct_and_dashed_forms() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = PageId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn parses_notion_urls() {
        let id = PageId::parse("https://www.notion.so/Test-Page-550e8400e29b41d4a716446655440000")
            .unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = BlockId::parse("https://www.notion.so/550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn normalizes_to_lowercase() {
        let id = DatabaseId::parse("550E8400E29B41D4A716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn rejects_invalid_ids() {
        assert!(PageId::parse("too-short").is_err());
        assert!(PageId::parse("not-hex-chars-00000000000000000").is_err());
        assert!(PageId::parse("").is_err());
        assert!(PageId::parse("https://www.notion.so/no-id-here").is_err());
    }

    #[test]
    fn renders_hyphenated_form() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.to_hyphenated(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn deserializes_hyphenated_wire_ids_to_normalized_form() {
        let id: PageId =
            serde_json::from_str("\"550e8400-e29b-41d4-a716-446655440000\"").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn deserializes_unrecognized_wire_ids_verbatim() {
        let id: UserId = serde_json::from_str("\"workspace-bot-1\"").unwrap();
        assert_eq!(id.as_str(), "workspace-bot-1");
        assert_eq!(id.to_hyphenated(), "workspace-bot-1");
    }

    #[test]
    fn hyphenation_leaves_non_hex_values_alone() {
        // Both are 32 bytes without a hyphen, but carry no id shape: they
        // must render as stored, not be dashed at fixed byte offsets.
        let id: UserId = serde_json::from_str("\"€€€€€€€€€€ab\"").unwrap();
        assert_eq!(id.to_hyphenated(), "€€€€€€€€€€ab");

        let id: UserId = serde_json::from_str("\"workspace_bot_targets_123456789a\"").unwrap();
        assert_eq!(id.to_hyphenated(), "workspace_bot_targets_123456789a");
    }
}
