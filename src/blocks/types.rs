//! Typed Slack Block Kit model.
//!
//! A closed set of block variants tagged by `type`; unknown tags are
//! rejected at deserialization rather than passed through untyped. Block
//! order inside an attachment is semantically meaningful and preserved
//! exactly as constructed.

use serde::{Deserialize, Serialize};

/// One structured content unit within a message attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        text: TextObject,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accessory: Option<Accessory>,
    },
    Header {
        text: TextObject,
    },
    Divider,
    Image {
        image_url: String,
        alt_text: String,
    },
    Context {
        elements: Vec<TextObject>,
    },
}

impl Block {
    /// A section block with mrkdwn text and no accessory.
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::mrkdwn(text),
            accessory: None,
        }
    }

    /// A header block with plain text.
    pub fn header(text: impl Into<String>) -> Self {
        Block::Header {
            text: TextObject::plain(text),
        }
    }

    /// A context block with a single mrkdwn element.
    pub fn context(text: impl Into<String>) -> Self {
        Block::Context {
            elements: vec![TextObject::mrkdwn(text)],
        }
    }
}

/// Text payload of a block; mrkdwn for sections and context elements,
/// plain text (with emoji rendering) for headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
    PlainText { text: String, emoji: bool },
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        TextObject::Mrkdwn { text: text.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        TextObject::PlainText {
            text: text.into(),
            emoji: true,
        }
    }

    /// The raw text regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            TextObject::Mrkdwn { text } => text,
            TextObject::PlainText { text, .. } => text,
        }
    }
}

/// A section accessory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Image { image_url: String, alt_text: String },
}

/// The outer deliverable handed to the transport. Serialized shape is a
/// compatibility surface: `{"attachments": [{"fallback", "color", "blocks"}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub fallback: String,
    pub color: String,
    pub blocks: Vec<Block>,
}

/// Shape of a user-supplied Block Kit template after rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockKitTemplate {
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_serializes_with_mrkdwn_text() {
        let block = Block::section("*Build:* ctrf #123");
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "type": "section",
                "text": { "type": "mrkdwn", "text": "*Build:* ctrf #123" }
            })
        );
    }

    #[test]
    fn test_header_serializes_with_plain_text_and_emoji() {
        let block = Block::header("Test Results");
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "type": "header",
                "text": { "type": "plain_text", "text": "Test Results", "emoji": true }
            })
        );
    }

    #[test]
    fn test_divider_serializes_to_bare_tag() {
        assert_eq!(
            serde_json::to_value(Block::Divider).unwrap(),
            json!({ "type": "divider" })
        );
    }

    #[test]
    fn test_context_serializes_elements() {
        let block = Block::context("footer");
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "type": "context",
                "elements": [{ "type": "mrkdwn", "text": "footer" }]
            })
        );
    }

    #[test]
    fn test_section_with_image_accessory() {
        let block = Block::Section {
            text: TextObject::mrkdwn("summary"),
            accessory: Some(Accessory::Image {
                image_url: "https://example.com/chart".to_string(),
                alt_text: "Pie Chart".to_string(),
            }),
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["accessory"]["type"], "image");
        assert_eq!(value["accessory"]["alt_text"], "Pie Chart");
    }

    #[test]
    fn test_blocks_round_trip() {
        let blocks = vec![
            Block::header("Test Results"),
            Block::section("body"),
            Block::Divider,
            Block::context("footer"),
        ];
        let encoded = serde_json::to_string(&blocks).unwrap();
        let decoded: Vec<Block> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, blocks);
    }

    #[test]
    fn test_unknown_block_type_rejected() {
        let result = serde_json::from_value::<Block>(json!({
            "type": "actions",
            "elements": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_envelope_shape() {
        let message = SlackMessage {
            attachments: vec![Attachment {
                fallback: "Test Results\nctrf #123".to_string(),
                color: "#36a64f".to_string(),
                blocks: vec![Block::header("Test Results")],
            }],
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["attachments"][0]["color"], "#36a64f");
        assert_eq!(value["attachments"][0]["fallback"], "Test Results\nctrf #123");
        assert_eq!(value["attachments"][0]["blocks"][0]["type"], "header");
    }
}
