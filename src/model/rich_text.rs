// src/model/rich_text.rs
//! Rich text runs, the body of most block kinds.

use crate::types::Color;
use serde::{Deserialize, Serialize};

/// A link attached to a text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Styling flags applied to a single rich text run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// Literal payload of a plain text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// Payload of an inline equation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationExpression {
    pub expression: String,
}

/// The kind of rich text content — a typed vocabulary replacing
/// stringly-typed dispatch.
///
/// Each variant carries its specific data, making invalid states
/// unrepresentable: you can't have a "mention" type with no mention data,
/// or an "equation" type with no expression. Mention payloads stay generic
/// JSON — they reference workspace objects this layer never constructs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextKind {
    Text { text: TextContent },
    Mention { mention: serde_json::Value },
    Equation { equation: EquationExpression },
}

/// Rich text item with formatting annotations.
///
/// `kind` carries the content variant — text, mention, or equation — and
/// `plain_text` provides the fallback rendering for any variant. On the
/// wire the variant is the `type` tag plus a same-named sibling key,
/// flattened into the run object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(flatten)]
    pub kind: RichTextKind,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl RichText {
    /// A single unstyled text run with default annotations.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: RichTextKind::Text {
                text: TextContent {
                    content: text.clone(),
                    link: None,
                },
            },
            annotations: Annotations::default(),
            plain_text: text,
            href: None,
        }
    }

    /// One-element list of a plain run, the shape block bodies expect.
    pub fn list_of(text: impl Into<String>) -> Vec<Self> {
        vec![Self::plain(text)]
    }

    /// The literal content, when this run is plain text.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            RichTextKind::Text { text } => Some(&text.content),
            _ => None,
        }
    }
}

/// Concatenate the plain text of a run sequence.
pub fn plain_text_of(runs: &[RichText]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_run_has_default_styling() {
        let run = RichText::plain("hello");
        assert_eq!(run.plain_text, "hello");
        assert_eq!(run.text_content(), Some("hello"));
        assert_eq!(run.annotations, Annotations::default());
        assert_eq!(run.annotations.color, Color::Default);
        assert!(run.href.is_none());
    }

    #[test]
    fn wire_shape_uses_type_tag_with_sibling_payload() {
        let run = RichText::plain("hi");
        let value = serde_json::to_value(&run).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["text"]["content"], "hi");
        assert_eq!(value["plain_text"], "hi");
        assert_eq!(value["annotations"]["bold"], false);
        assert_eq!(value["annotations"]["color"], "default");
    }

    #[test]
    fn decodes_notion_response_run() {
        let json = r#"{
            "type": "text",
            "text": {"content": "Styled", "link": null},
            "annotations": {
                "bold": true,
                "italic": false,
                "strikethrough": false,
                "underline": false,
                "code": false,
                "color": "red"
            },
            "plain_text": "Styled",
            "href": null
        }"#;

        let run: RichText = serde_json::from_str(json).unwrap();
        assert!(run.annotations.bold);
        assert_eq!(run.annotations.color, Color::Red);
        assert_eq!(run.text_content(), Some("Styled"));
    }

    #[test]
    fn mention_runs_survive_as_generic_json() {
        let json = r#"{
            "type": "mention",
            "mention": {"type": "user", "user": {"object": "user", "id": "abc"}},
            "annotations": {
                "bold": false, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default"
            },
            "plain_text": "@Someone",
            "href": null
        }"#;

        let run: RichText = serde_json::from_str(json).unwrap();
        assert_eq!(run.plain_text, "@Someone");
        assert!(run.text_content().is_none());
        assert!(matches!(run.kind, RichTextKind::Mention { .. }));
    }

    #[test]
    fn concatenates_plain_text() {
        let runs = vec![RichText::plain("a"), RichText::plain("b")];
        assert_eq!(plain_text_of(&runs), "ab");
    }
}
