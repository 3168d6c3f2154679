// src/model/page.rs
//! Pages and the parent union that addresses where they live.

use crate::types::{BlockId, DatabaseId, PageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Where an object hangs in the workspace tree. Internally tagged on the
/// wire: `{"type": "page_id", "page_id": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    #[serde(rename = "page_id")]
    Page { page_id: PageId },
    #[serde(rename = "database_id")]
    Database { database_id: DatabaseId },
    #[serde(rename = "block_id")]
    Block { block_id: BlockId },
    Workspace,
}

impl Parent {
    pub fn page(page_id: PageId) -> Self {
        Self::Page { page_id }
    }

    pub fn database(database_id: DatabaseId) -> Self {
        Self::Database { database_id }
    }

    pub fn block(block_id: BlockId) -> Self {
        Self::Block { block_id }
    }

    pub fn workspace() -> Self {
        Self::Workspace
    }
}

/// A page, as Notion returns it. Properties stay generic JSON because
/// their schema is workspace-defined, not something this layer can type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PageId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parent_uses_internal_tagging() {
        let id: PageId = crate::types::Id::parse("59833787-2cf9-4fdf-8782-e53db20768a5").unwrap();
        let parent = Parent::page(id);
        let value = serde_json::to_value(&parent).unwrap();
        assert_eq!(
            value,
            json!({"type": "page_id", "page_id": "598337872cf94fdf8782e53db20768a5"})
        );
    }

    #[test]
    fn workspace_parent_tolerates_the_boolean_marker() {
        let parsed: Parent =
            serde_json::from_value(json!({"type": "workspace", "workspace": true})).unwrap();
        assert_eq!(parsed, Parent::Workspace);
    }

    #[test]
    fn page_decodes_response_shape() {
        let json = r#"{
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "created_time": "2022-03-01T19:05:00.000Z",
            "archived": false,
            "parent": {"type": "database_id", "database_id": "d9824bdc-8445-4327-be8b-5b47500af6ce"},
            "properties": {"Name": {"id": "title"}},
            "url": "https://www.notion.so/Tuscan-kale-598337872cf94fdf8782e53db20768a5"
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.object.as_deref(), Some("page"));
        assert!(matches!(page.parent, Some(Parent::Database { .. })));
        assert!(page.properties.unwrap().contains_key("Name"));
    }

    #[test]
    fn empty_page_serializes_to_an_empty_object() {
        let value = serde_json::to_value(Page::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
