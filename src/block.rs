//! Top-level Block Kit blocks and text objects.
//!
//! See: <https://api.slack.com/reference/block-kit/blocks>

use serde_derive::Serialize;

use crate::context::ContextItem;
use crate::element::Element;
use crate::rich_text::RichTextNode;

/// Text object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Plain text, emoji shortcodes rendered.
    PlainText { text: String, emoji: bool },
    /// Slack-flavoured markdown.
    Mrkdwn { text: String },
}

impl Text {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: true,
        }
    }

    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// A single unit of message layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Text with an optional accessory, or a grid of `fields`.
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<Text>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        fields: Vec<Text>,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Element>,
    },
    Header {
        text: Text,
    },
    Divider,
    Image {
        image_url: String,
        alt_text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<Text>,
    },
    Actions {
        elements: Vec<Element>,
    },
    Context {
        elements: Vec<ContextItem>,
    },
    /// A labelled form control. Holds exactly one element.
    Input {
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        dispatch_action: bool,
        element: Element,
        label: Text,
    },
    RichText {
        elements: Vec<RichTextNode>,
    },
    /// A remote file registered with Slack under `external_id`.
    File {
        external_id: String,
        source: String,
    },
}

impl Block {
    /// Section with a markdown label and an element docked to its right.
    pub(crate) fn labelled(label: impl Into<String>, accessory: impl Into<Element>) -> Self {
        Self::Section {
            text: Some(Text::mrkdwn(label)),
            fields: Vec::new(),
            accessory: Some(accessory.into()),
        }
    }

    /// Input block with a plain text label.
    pub(crate) fn input(label: impl Into<String>, element: impl Into<Element>) -> Self {
        Self::Input {
            dispatch_action: false,
            element: element.into(),
            label: Text::plain(label),
        }
    }
}
