// src/model/content.rs
//! Typed bodies for the block kinds this client models.
//!
//! One variant per kind, one struct per distinct field set. The wire
//! convention (payload under a key named after the type tag) lives entirely
//! in the block envelope codec; these types only know their own fields.

use super::block_type::BlockType;
use super::rich_text::RichText;
use crate::error::Error;
use crate::types::Color;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shared body of paragraph and list-item kinds: text runs plus a color.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
}

impl TextBlockContent {
    pub fn new(rich_text: Vec<RichText>, color: Color) -> Self {
        Self { rich_text, color }
    }

    /// Body holding a single unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            rich_text: RichText::list_of(text),
            color: Color::Default,
        }
    }
}

/// Heading depth, folded into the wire type tag (`heading_1..=heading_3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HeadingLevel {
    #[default]
    One,
    Two,
    Three,
}

impl HeadingLevel {
    fn from_u8(level: u8) -> Result<Self, Error> {
        match level {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(Error::InvalidArgument(format!(
                "Heading level must be 1, 2, or 3, got {}",
                other
            ))),
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Heading body. The level is not a wire field; it rides in the type tag,
/// so the envelope codec injects it after decoding the visible fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_toggleable: Option<bool>,
    #[serde(skip)]
    level: HeadingLevel,
}

impl HeadingContent {
    pub fn new(rich_text: Vec<RichText>, level: u8) -> Result<Self, Error> {
        Ok(Self {
            rich_text,
            color: Color::Default,
            is_toggleable: None,
            level: HeadingLevel::from_u8(level)?,
        })
    }

    /// Heading holding a single unstyled run.
    pub fn plain(text: impl Into<String>, level: u8) -> Result<Self, Error> {
        Self::new(RichText::list_of(text), level)
    }

    pub fn level(&self) -> u8 {
        self.level.as_u8()
    }

    /// Change the level, re-deriving the reported type. Fails outside 1..=3
    /// just like construction; there is no silent clamping.
    pub fn set_level(&mut self, level: u8) -> Result<(), Error> {
        self.level = HeadingLevel::from_u8(level)?;
        Ok(())
    }

    pub fn toggleable(mut self, is_toggleable: bool) -> Self {
        self.is_toggleable = Some(is_toggleable);
        self
    }

    fn reported_type(&self) -> BlockType {
        match self.level {
            HeadingLevel::One => BlockType::Heading1,
            HeadingLevel::Two => BlockType::Heading2,
            HeadingLevel::Three => BlockType::Heading3,
        }
    }
}

/// To-do body: text runs plus the checkbox state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToDoContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub checked: bool,
}

impl ToDoContent {
    pub fn new(rich_text: Vec<RichText>, checked: bool) -> Self {
        Self {
            rich_text,
            color: Color::Default,
            checked,
        }
    }

    pub fn plain(text: impl Into<String>, checked: bool) -> Self {
        Self::new(RichText::list_of(text), checked)
    }
}

/// Code body: the source text, its language, and an optional caption.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Vec<RichText>>,
}

impl CodeContent {
    pub fn new(rich_text: Vec<RichText>, language: impl Into<String>) -> Self {
        Self {
            rich_text,
            language: language.into(),
            caption: None,
        }
    }

    pub fn plain(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self::new(RichText::list_of(code), language)
    }

    pub fn with_caption(mut self, caption: Vec<RichText>) -> Self {
        self.caption = Some(caption);
        self
    }
}

/// An externally hosted file, referenced by URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// A file hosted by Notion; the URL expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotionFile {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
}

/// Where an image lives: exactly one of the two sources, structurally.
///
/// Untagged on purpose: Notion includes an inner `type` tag in responses
/// but accepts payloads without one, and the presence of the `external` or
/// `file` key already discriminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileObject {
    External { external: ExternalFile },
    File { file: NotionFile },
}

/// Image body: one source plus an optional caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    #[serde(flatten)]
    pub source: FileObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Vec<RichText>>,
}

impl ImageContent {
    /// Image referencing an externally hosted URL.
    pub fn of_external(url: impl Into<String>) -> Self {
        Self {
            source: FileObject::External {
                external: ExternalFile { url: url.into() },
            },
            caption: None,
        }
    }

    /// Image hosted by Notion, with its expiring URL.
    pub fn of_file(url: impl Into<String>, expiry_time: Option<DateTime<Utc>>) -> Self {
        Self {
            source: FileObject::File {
                file: NotionFile {
                    url: url.into(),
                    expiry_time,
                },
            },
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: Vec<RichText>) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn external(&self) -> Option<&ExternalFile> {
        match &self.source {
            FileObject::External { external } => Some(external),
            FileObject::File { .. } => None,
        }
    }

    pub fn file(&self) -> Option<&NotionFile> {
        match &self.source {
            FileObject::File { file } => Some(file),
            FileObject::External { .. } => None,
        }
    }

    /// The source URL, wherever the image lives.
    pub fn url(&self) -> &str {
        match &self.source {
            FileObject::External { external } => &external.url,
            FileObject::File { file } => &file.url,
        }
    }
}

/// The content variant family, one case per modeled block kind.
///
/// Paragraphs and list items share a body shape, so they share a struct;
/// the enum case still pins the kind.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Paragraph(TextBlockContent),
    Heading(HeadingContent),
    BulletedListItem(TextBlockContent),
    NumberedListItem(TextBlockContent),
    ToDo(ToDoContent),
    Code(CodeContent),
    Image(ImageContent),
}

impl BlockContent {
    /// The block type this content reports on the wire.
    ///
    /// Derived, never stored: a heading's type follows its level, so the
    /// two can't drift apart.
    pub fn kind(&self) -> BlockType {
        match self {
            Self::Paragraph(_) => BlockType::Paragraph,
            Self::Heading(heading) => heading.reported_type(),
            Self::BulletedListItem(_) => BlockType::BulletedListItem,
            Self::NumberedListItem(_) => BlockType::NumberedListItem,
            Self::ToDo(_) => BlockType::ToDo,
            Self::Code(_) => BlockType::Code,
            Self::Image(_) => BlockType::Image,
        }
    }

    /// The rich text runs of this content, for kinds that carry them.
    /// Images have no rich text (a caption is not body text).
    pub fn rich_text(&self) -> Option<&[RichText]> {
        match self {
            Self::Paragraph(body) => Some(&body.rich_text),
            Self::Heading(body) => Some(&body.rich_text),
            Self::BulletedListItem(body) => Some(&body.rich_text),
            Self::NumberedListItem(body) => Some(&body.rich_text),
            Self::ToDo(body) => Some(&body.rich_text),
            Self::Code(body) => Some(&body.rich_text),
            Self::Image(_) => None,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(TextBlockContent::plain(text))
    }

    pub fn heading(text: impl Into<String>, level: u8) -> Result<Self, Error> {
        Ok(Self::Heading(HeadingContent::plain(text, level)?))
    }

    pub fn bulleted_list_item(text: impl Into<String>) -> Self {
        Self::BulletedListItem(TextBlockContent::plain(text))
    }

    pub fn numbered_list_item(text: impl Into<String>) -> Self {
        Self::NumberedListItem(TextBlockContent::plain(text))
    }

    pub fn to_do(text: impl Into<String>, checked: bool) -> Self {
        Self::ToDo(ToDoContent::plain(text, checked))
    }

    pub fn code(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self::Code(CodeContent::plain(code, language))
    }

    pub fn image_from_url(url: impl Into<String>) -> Self {
        Self::Image(ImageContent::of_external(url))
    }
}
