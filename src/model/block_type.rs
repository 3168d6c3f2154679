// src/model/block_type.rs
//! The closed taxonomy of Notion block kinds.

use std::fmt;

/// Well-known Notion block type identifiers.
///
/// Each member maps to exactly one stable wire string. Wire strings this
/// client does not recognize map to `Unsupported` instead of failing, so
/// future Notion block kinds decode as metadata-only blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    BulletedListItem,
    NumberedListItem,
    ToDo,
    Toggle,
    Code,
    ChildPage,
    ChildDatabase,
    Embed,
    Image,
    Video,
    File,
    Pdf,
    Bookmark,
    Callout,
    Quote,
    Equation,
    Divider,
    TableOfContents,
    Column,
    ColumnList,
    LinkPreview,
    SyncedBlock,
    Template,
    LinkToPage,
    Table,
    TableRow,
    Unsupported,
}

impl BlockType {
    /// Every member of the taxonomy, in wire-table order.
    pub const ALL: &'static [BlockType] = &[
        BlockType::Paragraph,
        BlockType::Heading1,
        BlockType::Heading2,
        BlockType::Heading3,
        BlockType::BulletedListItem,
        BlockType::NumberedListItem,
        BlockType::ToDo,
        BlockType::Toggle,
        BlockType::Code,
        BlockType::ChildPage,
        BlockType::ChildDatabase,
        BlockType::Embed,
        BlockType::Image,
        BlockType::Video,
        BlockType::File,
        BlockType::Pdf,
        BlockType::Bookmark,
        BlockType::Callout,
        BlockType::Quote,
        BlockType::Equation,
        BlockType::Divider,
        BlockType::TableOfContents,
        BlockType::Column,
        BlockType::ColumnList,
        BlockType::LinkPreview,
        BlockType::SyncedBlock,
        BlockType::Template,
        BlockType::LinkToPage,
        BlockType::Table,
        BlockType::TableRow,
        BlockType::Unsupported,
    ];

    /// Total mapping from wire strings into the taxonomy.
    ///
    /// Never fails: strings outside the table come back as `Unsupported`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "paragraph" => Self::Paragraph,
            "heading_1" => Self::Heading1,
            "heading_2" => Self::Heading2,
            "heading_3" => Self::Heading3,
            "bulleted_list_item" => Self::BulletedListItem,
            "numbered_list_item" => Self::NumberedListItem,
            "to_do" => Self::ToDo,
            "toggle" => Self::Toggle,
            "code" => Self::Code,
            "child_page" => Self::ChildPage,
            "child_database" => Self::ChildDatabase,
            "embed" => Self::Embed,
            "image" => Self::Image,
            "video" => Self::Video,
            "file" => Self::File,
            "pdf" => Self::Pdf,
            "bookmark" => Self::Bookmark,
            "callout" => Self::Callout,
            "quote" => Self::Quote,
            "equation" => Self::Equation,
            "divider" => Self::Divider,
            "table_of_contents" => Self::TableOfContents,
            "column" => Self::Column,
            "column_list" => Self::ColumnList,
            "link_preview" => Self::LinkPreview,
            "synced_block" => Self::SyncedBlock,
            "template" => Self::Template,
            "link_to_page" => Self::LinkToPage,
            "table" => Self::Table,
            "table_row" => Self::TableRow,
            _ => Self::Unsupported,
        }
    }

    /// The canonical wire string of this member.
    ///
    /// Injective over known members. `Unsupported` answers `"unsupported"`
    /// for display purposes, but the block encoder never writes it into a
    /// request body.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading1 => "heading_1",
            Self::Heading2 => "heading_2",
            Self::Heading3 => "heading_3",
            Self::BulletedListItem => "bulleted_list_item",
            Self::NumberedListItem => "numbered_list_item",
            Self::ToDo => "to_do",
            Self::Toggle => "toggle",
            Self::Code => "code",
            Self::ChildPage => "child_page",
            Self::ChildDatabase => "child_database",
            Self::Embed => "embed",
            Self::Image => "image",
            Self::Video => "video",
            Self::File => "file",
            Self::Pdf => "pdf",
            Self::Bookmark => "bookmark",
            Self::Callout => "callout",
            Self::Quote => "quote",
            Self::Equation => "equation",
            Self::Divider => "divider",
            Self::TableOfContents => "table_of_contents",
            Self::Column => "column",
            Self::ColumnList => "column_list",
            Self::LinkPreview => "link_preview",
            Self::SyncedBlock => "synced_block",
            Self::Template => "template",
            Self::LinkToPage => "link_to_page",
            Self::Table => "table",
            Self::TableRow => "table_row",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}
