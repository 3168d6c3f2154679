// src/model/block.rs
//! The block envelope and its wire codec.
//!
//! Notion serializes a block as a flat object: shared metadata fields, a
//! `type` discriminator string, and the kind-specific payload under a key
//! named after that string (`"type": "paragraph"` next to `"paragraph":
//! {...}`). Serde's derived tagging can't express the envelope fields
//! riding alongside, so the codec here is explicit: [`Block::from_value`]
//! and [`Block::to_value`] own the dispatch table, and the `Serialize` /
//! `Deserialize` impls delegate to them.
//!
//! Decoding rules:
//! - a missing `type` key is an error; nothing else about the shape is
//!   guessed,
//! - an unknown `type` string is tolerated: metadata decodes, content
//!   stays unset,
//! - a known `type` whose payload key is absent also leaves content unset
//!   (Notion omits payloads in some listings),
//! - a present payload that fails to parse is an error.
//!
//! Encoding mirrors the decode: the tag is derived from the content
//! variant when content is present, absent fields are omitted rather than
//! written as null, and a block whose only known kind is `unsupported`
//! gets no `type` key at all, since that tag is not accepted on writes.

use super::block_type::BlockType;
use super::content::{BlockContent, HeadingContent};
use super::rich_text::RichText;
use crate::error::{Error, Result};
use crate::types::BlockId;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A Notion block: response metadata plus optional typed content.
///
/// Every metadata field is optional because every context omits some of
/// them: responses carry ids and timestamps, request payloads carry
/// neither, and partial updates may carry only `archived`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub id: Option<BlockId>,
    pub object: Option<String>,
    pub created_time: Option<DateTime<Utc>>,
    pub last_edited_time: Option<DateTime<Utc>>,
    pub archived: Option<bool>,
    pub parent_id: Option<String>,
    pub has_children: Option<bool>,
    /// Last known type, kept so a content-less block still reports one.
    kind: Option<BlockType>,
    content: Option<BlockContent>,
}

/// Metadata decode, separated from content dispatch. Unknown keys are
/// ignored, so the payload key simply falls through.
#[derive(Deserialize)]
struct EnvelopeFields {
    #[serde(default)]
    id: Option<BlockId>,
    #[serde(default)]
    object: Option<String>,
    #[serde(default)]
    created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    archived: Option<bool>,
    #[serde(default)]
    parent_id: Option<String>,
    #[serde(default)]
    has_children: Option<bool>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block wrapping the given content, with no metadata set.
    pub fn from_content(content: BlockContent) -> Self {
        let mut block = Self::default();
        block.set_content(content);
        block
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::from_content(BlockContent::paragraph(text))
    }

    pub fn heading(text: impl Into<String>, level: u8) -> Result<Self> {
        Ok(Self::from_content(BlockContent::heading(text, level)?))
    }

    pub fn bulleted_list_item(text: impl Into<String>) -> Self {
        Self::from_content(BlockContent::bulleted_list_item(text))
    }

    pub fn numbered_list_item(text: impl Into<String>) -> Self {
        Self::from_content(BlockContent::numbered_list_item(text))
    }

    pub fn to_do(text: impl Into<String>, checked: bool) -> Self {
        Self::from_content(BlockContent::to_do(text, checked))
    }

    pub fn code(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self::from_content(BlockContent::code(code, language))
    }

    pub fn image_from_url(url: impl Into<String>) -> Self {
        Self::from_content(BlockContent::image_from_url(url))
    }

    /// The block's type. Content wins over the stored kind, so a heading
    /// whose level changed reports the matching `heading_n`.
    pub fn kind(&self) -> Option<BlockType> {
        self.content.as_ref().map(BlockContent::kind).or(self.kind)
    }

    /// Pin the type without attaching content. Useful for sparse payloads
    /// such as archive toggles, which still need a `type` key.
    pub fn set_kind(&mut self, kind: BlockType) {
        self.kind = Some(kind);
    }

    pub fn content(&self) -> Option<&BlockContent> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut BlockContent> {
        self.content.as_mut()
    }

    /// Attach content, syncing the stored kind to it.
    pub fn set_content(&mut self, content: BlockContent) {
        self.kind = Some(content.kind());
        self.content = Some(content);
    }

    /// Detach the content, keeping its kind so the block still encodes a
    /// `type` key. This is how sparse update payloads are built.
    pub fn take_content(&mut self) -> Option<BlockContent> {
        if let Some(content) = &self.content {
            self.kind = Some(content.kind());
        }
        self.content.take()
    }

    /// The content's rich text runs, when the kind carries them.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        self.content.as_ref().and_then(BlockContent::rich_text)
    }

    /// Concatenated plain text of the content's runs, empty when there are
    /// none.
    pub fn plain_text(&self) -> String {
        self.rich_text()
            .map(super::rich_text::plain_text_of)
            .unwrap_or_default()
    }

    /// Decode a block from its wire shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::Decode("block payload is not a JSON object".to_owned()))?;

        let tag = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Decode("block is missing its `type` discriminator".to_owned()))?;
        let kind = BlockType::from_wire(tag);

        let content = match object.get(tag) {
            Some(payload) => decode_content(kind, payload)?,
            None => None,
        };

        let fields: EnvelopeFields = serde_json::from_value(value.clone())
            .map_err(|err| Error::Decode(format!("invalid block metadata: {}", err)))?;

        Ok(Self {
            id: fields.id,
            object: fields.object,
            created_time: fields.created_time,
            last_edited_time: fields.last_edited_time,
            archived: fields.archived,
            parent_id: fields.parent_id,
            has_children: fields.has_children,
            kind: Some(kind),
            content,
        })
    }

    /// Encode the block to its wire shape. Fields that are `None` are
    /// omitted entirely.
    pub fn to_value(&self) -> Result<Value> {
        let mut object = Map::new();

        if let Some(id) = &self.id {
            object.insert("id".to_owned(), Value::String(id.as_str().to_owned()));
        }
        if let Some(kind) = &self.object {
            object.insert("object".to_owned(), Value::String(kind.clone()));
        }
        if let Some(created) = &self.created_time {
            object.insert("created_time".to_owned(), encode_field(created)?);
        }
        if let Some(edited) = &self.last_edited_time {
            object.insert("last_edited_time".to_owned(), encode_field(edited)?);
        }
        if let Some(archived) = self.archived {
            object.insert("archived".to_owned(), Value::Bool(archived));
        }
        if let Some(parent_id) = &self.parent_id {
            object.insert("parent_id".to_owned(), Value::String(parent_id.clone()));
        }
        if let Some(has_children) = self.has_children {
            object.insert("has_children".to_owned(), Value::Bool(has_children));
        }

        match &self.content {
            Some(content) => {
                let tag = content.kind().as_wire_str();
                object.insert("type".to_owned(), Value::String(tag.to_owned()));
                object.insert(tag.to_owned(), encode_content(content)?);
            }
            None => {
                // The `unsupported` tag is read-only on Notion's side, so a
                // block that only ever decoded as unsupported encodes with
                // no type key rather than a tag the API would reject.
                if let Some(kind) = self.kind {
                    if kind != BlockType::Unsupported {
                        object.insert(
                            "type".to_owned(),
                            Value::String(kind.as_wire_str().to_owned()),
                        );
                    }
                }
            }
        }

        Ok(Value::Object(object))
    }

    /// Decode a block from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| Error::Decode(format!("block is not valid JSON: {}", err)))?;
        Self::from_value(&value)
    }

    /// Encode the block to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let value = self.to_value()?;
        serde_json::to_string(&value).map_err(|source| Error::Serialization { source })
    }
}

/// The decode dispatch table: one arm per kind this client types. Kinds
/// without an arm are carried as metadata-only blocks.
fn decode_content(kind: BlockType, payload: &Value) -> Result<Option<BlockContent>> {
    let content = match kind {
        BlockType::Paragraph => Some(BlockContent::Paragraph(parse_payload(payload)?)),
        BlockType::Heading1 | BlockType::Heading2 | BlockType::Heading3 => {
            let mut heading: HeadingContent = parse_payload(payload)?;
            let level = match kind {
                BlockType::Heading1 => 1,
                BlockType::Heading2 => 2,
                _ => 3,
            };
            heading.set_level(level)?;
            Some(BlockContent::Heading(heading))
        }
        BlockType::BulletedListItem => {
            Some(BlockContent::BulletedListItem(parse_payload(payload)?))
        }
        BlockType::NumberedListItem => {
            Some(BlockContent::NumberedListItem(parse_payload(payload)?))
        }
        BlockType::ToDo => Some(BlockContent::ToDo(parse_payload(payload)?)),
        BlockType::Code => Some(BlockContent::Code(parse_payload(payload)?)),
        BlockType::Image => Some(BlockContent::Image(parse_payload(payload)?)),
        _ => None,
    };
    Ok(content)
}

/// The encode dispatch table, mirror of [`decode_content`].
fn encode_content(content: &BlockContent) -> Result<Value> {
    let value = match content {
        BlockContent::Paragraph(body)
        | BlockContent::BulletedListItem(body)
        | BlockContent::NumberedListItem(body) => serde_json::to_value(body),
        BlockContent::Heading(body) => serde_json::to_value(body),
        BlockContent::ToDo(body) => serde_json::to_value(body),
        BlockContent::Code(body) => serde_json::to_value(body),
        BlockContent::Image(body) => serde_json::to_value(body),
    };
    value.map_err(|source| Error::Serialization { source })
}

fn parse_payload<T: DeserializeOwned>(payload: &Value) -> Result<T> {
    serde_json::from_value(payload.clone())
        .map_err(|err| Error::Decode(format!("invalid block payload: {}", err)))
}

fn encode_field<T: Serialize>(field: &T) -> Result<Value> {
    serde_json::to_value(field).map_err(|source| Error::Serialization { source })
}

// Delegating impls keep Block usable inside derived containers such as
// paginated response bodies.
impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.to_value().map_err(serde::ser::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}
