//! End-to-end coverage of the block wire codec.
//!
//! Exercises the envelope against realistic response payloads: round-trips
//! for every typed kind, heading level handling, tolerance for unknown
//! block kinds, and the sparse encodings used by update requests.

use notion_sdk::{Block, BlockContent, BlockType, Color, Error, HeadingContent, ImageContent};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn decode(value: &Value) -> Block {
    Block::from_value(value).expect("fixture should decode")
}

fn round_trip(value: &Value) -> Block {
    let first = decode(value);
    let encoded = first.to_value().expect("decoded block should encode");
    let second = Block::from_value(&encoded).expect("encoded block should decode");
    assert_eq!(first, second);
    second
}

mod round_trip_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraph_with_annotations_survives() {
        let block = round_trip(&json!({
            "object": "block",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "created_time": "2022-03-01T19:05:00.000Z",
            "last_edited_time": "2022-07-06T19:41:00.000Z",
            "has_children": false,
            "archived": false,
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{
                    "type": "text",
                    "text": {"content": "Lacinato kale", "link": null},
                    "annotations": {
                        "bold": true, "italic": false, "strikethrough": false,
                        "underline": false, "code": false, "color": "green"
                    },
                    "plain_text": "Lacinato kale",
                    "href": null
                }],
                "color": "default"
            }
        }));

        assert_eq!(block.kind(), Some(BlockType::Paragraph));
        let runs = block.rich_text().expect("paragraph carries rich text");
        assert!(runs[0].annotations.bold);
        assert_eq!(runs[0].annotations.color, Color::Green);
        assert_eq!(block.plain_text(), "Lacinato kale");
    }

    #[test]
    fn every_list_kind_survives() {
        for tag in ["bulleted_list_item", "numbered_list_item"] {
            let block = round_trip(&json!({
                "type": tag,
                tag: {
                    "rich_text": [{
                        "type": "text",
                        "text": {"content": "item one"},
                        "plain_text": "item one"
                    }],
                    "color": "gray_background"
                }
            }));
            assert_eq!(block.kind().unwrap().as_wire_str(), tag);
            assert_eq!(block.plain_text(), "item one");
        }
    }

    #[test]
    fn to_do_keeps_checked_state() {
        let block = round_trip(&json!({
            "type": "to_do",
            "to_do": {
                "rich_text": [{
                    "type": "text",
                    "text": {"content": "water the plants"},
                    "plain_text": "water the plants"
                }],
                "checked": true,
                "color": "default"
            }
        }));

        match block.content() {
            Some(BlockContent::ToDo(to_do)) => assert!(to_do.checked),
            other => panic!("expected to_do content, got {:?}", other),
        }
    }

    #[test]
    fn code_keeps_language_and_caption() {
        let block = round_trip(&json!({
            "type": "code",
            "code": {
                "rich_text": [{
                    "type": "text",
                    "text": {"content": "fn main() {}"},
                    "plain_text": "fn main() {}"
                }],
                "language": "rust",
                "caption": [{
                    "type": "text",
                    "text": {"content": "entry point"},
                    "plain_text": "entry point"
                }]
            }
        }));

        match block.content() {
            Some(BlockContent::Code(code)) => {
                assert_eq!(code.language, "rust");
                assert!(code.caption.is_some());
            }
            other => panic!("expected code content, got {:?}", other),
        }
    }

    #[test]
    fn hosted_image_survives_with_expiry() {
        let block = round_trip(&json!({
            "type": "image",
            "image": {
                "type": "file",
                "file": {
                    "url": "https://files.notion.so/abc.png",
                    "expiry_time": "2024-06-01T00:00:00.000Z"
                },
                "caption": []
            }
        }));

        match block.content() {
            Some(BlockContent::Image(image)) => {
                assert!(image.file().is_some());
                assert!(image.external().is_none());
            }
            other => panic!("expected image content, got {:?}", other),
        }
    }

    #[test]
    fn background_colors_round_trip_their_wire_names() {
        let encoded = Block::from_value(&json!({
            "type": "paragraph",
            "paragraph": {"rich_text": [], "color": "blue_background"}
        }))
        .unwrap()
        .to_value()
        .unwrap();

        assert_eq!(encoded["paragraph"]["color"], "blue_background");
    }
}

mod heading_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_heading_tag_maps_to_its_level() {
        for (tag, level) in [("heading_1", 1u8), ("heading_2", 2), ("heading_3", 3)] {
            let block = decode(&json!({
                "type": tag,
                tag: {
                    "rich_text": [{
                        "type": "text",
                        "text": {"content": "Title"},
                        "plain_text": "Title"
                    }],
                    "color": "default",
                    "is_toggleable": false
                }
            }));

            match block.content() {
                Some(BlockContent::Heading(heading)) => assert_eq!(heading.level(), level),
                other => panic!("expected heading content, got {:?}", other),
            }
            assert_eq!(block.kind().unwrap().as_wire_str(), tag);
        }
    }

    #[test]
    fn heading_encodes_the_tag_for_its_level() {
        let value = Block::heading("Contents", 3).unwrap().to_value().unwrap();
        assert_eq!(value["type"], "heading_3");
        assert!(value.get("heading_3").is_some());
        assert!(value.get("heading_1").is_none());
    }

    #[test]
    fn heading_round_trips_through_every_level() {
        for level in 1..=3u8 {
            let original = Block::heading("Title", level).unwrap();
            let decoded = Block::from_value(&original.to_value().unwrap()).unwrap();
            assert_eq!(original, decoded);
        }
    }

    #[test]
    fn invalid_levels_fail_fast() {
        for level in [0u8, 4, 9] {
            assert!(matches!(
                Block::heading("Title", level),
                Err(Error::InvalidArgument(_))
            ));
            assert!(matches!(
                HeadingContent::plain("Title", level),
                Err(Error::InvalidArgument(_))
            ));
        }
    }
}

mod tolerance_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_block_kinds_decode_without_content() {
        let block = decode(&json!({
            "object": "block",
            "id": "9bc30ad4-9373-46a5-84ab-0a7845ee52e6",
            "has_children": false,
            "archived": false,
            "type": "cat_gif",
            "cat_gif": {"frames": 42}
        }));

        assert_eq!(block.kind(), Some(BlockType::Unsupported));
        assert!(block.content().is_none());
        assert_eq!(block.archived, Some(false));
        assert!(block.id.is_some());
    }

    #[test]
    fn unknown_kinds_are_not_reencoded() {
        let block = decode(&json!({"type": "cat_gif", "archived": true}));
        let encoded = block.to_value().unwrap();
        assert_eq!(encoded, json!({"archived": true}));
    }

    #[test]
    fn known_kind_with_absent_payload_is_valid() {
        let block = decode(&json!({"type": "divider", "has_children": false}));
        assert_eq!(block.kind(), Some(BlockType::Divider));
        assert!(block.content().is_none());

        // And it still announces its kind when encoded again.
        assert_eq!(
            block.to_value().unwrap(),
            json!({"type": "divider", "has_children": false})
        );
    }

    #[test]
    fn missing_discriminator_is_a_decode_error() {
        let result = Block::from_value(&json!({
            "object": "block",
            "paragraph": {"rich_text": []}
        }));
        assert!(matches!(result, Err(Error::Decode(_))));

        let result = Block::from_json(r#"{"archived": false}"#);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn garbage_payload_under_known_tag_is_a_decode_error() {
        let result = Block::from_value(&json!({
            "type": "paragraph",
            "paragraph": {"rich_text": "not a list"}
        }));
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}

mod projection_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn factory_paragraph_projects_its_single_run() {
        let block = Block::paragraph("hello");
        let runs = block.rich_text().expect("paragraph carries rich text");

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text_content(), Some("hello"));
        assert_eq!(runs[0].plain_text, "hello");
        assert!(!runs[0].annotations.bold);
        assert_eq!(runs[0].annotations.color, Color::Default);
    }

    #[test]
    fn projection_is_none_without_content() {
        assert!(Block::new().rich_text().is_none());
        assert!(Block::image_from_url("https://example.com/a.png")
            .rich_text()
            .is_none());

        let block = decode(&json!({"type": "divider", "divider": {}}));
        assert!(block.rich_text().is_none());
    }
}

mod image_tests {
    use super::*;

    #[test]
    fn of_external_populates_exactly_one_source() {
        let image = ImageContent::of_external("https://example.com/cat.png");
        assert!(image.external().is_some());
        assert!(image.file().is_none());

        let encoded = Block::from_content(BlockContent::Image(image))
            .to_value()
            .unwrap();
        let payload = encoded["image"].as_object().unwrap();
        assert!(payload.contains_key("external"));
        assert!(!payload.contains_key("file"));
        // The untagged source writes no inner discriminator.
        assert!(!payload.contains_key("type"));
    }

    #[test]
    fn of_file_populates_exactly_one_source() {
        let image = ImageContent::of_file("https://files.notion.so/x.png", None);
        assert!(image.file().is_some());
        assert!(image.external().is_none());

        let encoded = Block::from_content(BlockContent::Image(image))
            .to_value()
            .unwrap();
        let payload = encoded["image"].as_object().unwrap();
        assert!(payload.contains_key("file"));
        assert!(!payload.contains_key("external"));
    }
}

mod sparse_update_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn take_content_plus_archived_encodes_the_minimal_patch() {
        let mut block = decode(&json!({
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{
                    "type": "text",
                    "text": {"content": "old text"},
                    "plain_text": "old text"
                }],
                "color": "default"
            }
        }));

        block.take_content();
        block.archived = Some(true);

        assert_eq!(
            block.to_value().unwrap(),
            json!({"type": "paragraph", "archived": true})
        );
    }

    #[test]
    fn factory_blocks_encode_without_metadata() {
        let value = Block::to_do("ship it", false).to_value().unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["to_do", "type"]);
    }
}
