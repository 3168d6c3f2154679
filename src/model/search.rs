// src/model/search.rs
//! Search hits: a page-or-database union keyed on each hit's `object`.

use super::database::Database;
use super::page::Page;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One search hit. Search returns pages and databases mixed in a single
/// results array; anything else Notion starts returning is carried as raw
/// JSON instead of being dropped from the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Page(Page),
    Database(Database),
    Other(Value),
}

impl SearchResult {
    pub fn as_page(&self) -> Option<&Page> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_database(&self) -> Option<&Database> {
        match self {
            Self::Database(database) => Some(database),
            _ => None,
        }
    }
}

impl Serialize for SearchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => page.serialize(serializer),
            Self::Database(database) => database.serialize(serializer),
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SearchResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let object = value
            .get("object")
            .and_then(Value::as_str)
            .map(str::to_owned);
        match object.as_deref() {
            Some("page") => serde_json::from_value(value)
                .map(Self::Page)
                .map_err(serde::de::Error::custom),
            Some("database") => serde_json::from_value(value)
                .map(Self::Database)
                .map_err(serde::de::Error::custom),
            _ => Ok(Self::Other(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn hits_split_on_the_object_key() {
        let results: Vec<SearchResult> = serde_json::from_value(json!([
            {"object": "page", "id": "59833787-2cf9-4fdf-8782-e53db20768a5"},
            {"object": "database", "id": "d9824bdc-8445-4327-be8b-5b47500af6ce"},
            {"object": "comment", "id": "whatever"}
        ]))
        .unwrap();

        assert!(results[0].as_page().is_some());
        assert!(results[1].as_database().is_some());
        assert!(matches!(&results[2], SearchResult::Other(value)
            if value["object"] == "comment"));
    }

    #[test]
    fn unknown_hits_round_trip_untouched() {
        let raw = json!({"object": "comment", "discussion_id": "abc", "nested": {"x": 1}});
        let hit: SearchResult = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&hit).unwrap(), raw);
    }
}
