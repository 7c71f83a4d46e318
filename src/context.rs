use serde_derive::Serialize;

use crate::block::{Block, Text};
use crate::element::ImageElement;

/// Small muted content shown in a context block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContextItem {
    Text(Text),
    Image(ImageElement),
}

/// Collects the elements of a context block.
#[derive(Debug, Clone, Default)]
pub struct ContextElement {
    elements: Vec<ContextItem>,
}

impl ContextElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        self.elements.push(ContextItem::Text(Text::plain(content)));
        self
    }

    pub fn markdown(&mut self, content: impl Into<String>) -> &mut Self {
        self.elements.push(ContextItem::Text(Text::mrkdwn(content)));
        self
    }

    pub fn image(&mut self, url: impl Into<String>, alt_text: impl Into<String>) -> &mut Self {
        self.elements.push(ContextItem::Image(ImageElement::new(url, alt_text)));
        self
    }

    pub fn elements(&self) -> &[ContextItem] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<ContextItem> {
        self.elements
    }
}

/// Collects the text fields of a two-column section block.
#[derive(Debug, Clone, Default)]
pub struct TextBlock {
    fields: Vec<Text>,
}

impl TextBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        self.fields.push(Text::plain(content));
        self
    }

    pub fn markdown(&mut self, content: impl Into<String>) -> &mut Self {
        self.fields.push(Text::mrkdwn(content));
        self
    }

    /// A section block; `fields` is left out when nothing was added.
    pub fn into_block(self) -> Block {
        Block::Section {
            text: None,
            fields: self.fields,
            accessory: None,
        }
    }
}
