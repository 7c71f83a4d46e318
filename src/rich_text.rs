//! Rich text blocks: sections, lists, code and quotes built from styled runs.

use serde_derive::Serialize;

use crate::style::ListStyle;

/// Inline formatting of a text or link run. Always written in full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
}

impl TextStyle {
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        strike: false,
    };

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn strike(mut self) -> Self {
        self.strike = true;
        self
    }
}

/// Leaf content of a rich text container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextLeaf {
    Text {
        text: String,
        style: TextStyle,
    },
    Link {
        url: String,
        text: String,
        style: TextStyle,
    },
    Emoji {
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextNode {
    RichTextSection {
        elements: Vec<RichTextLeaf>,
    },
    /// Lists nest further nodes rather than leaves.
    RichTextList {
        style: ListStyle,
        indent: u32,
        elements: Vec<RichTextNode>,
    },
    RichTextPreformatted {
        elements: Vec<RichTextLeaf>,
    },
    RichTextQuote {
        elements: Vec<RichTextLeaf>,
    },
}

/// Collects the nodes of a `rich_text` block or of a nested list.
#[derive(Debug, Clone, Default)]
pub struct RichTextElement {
    elements: Vec<RichTextNode>,
}

impl RichTextElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&mut self, f: impl FnOnce(&mut RichTextSectionElement)) -> &mut Self {
        let elements = RichTextSectionElement::collect(f);
        self.elements.push(RichTextNode::RichTextSection { elements });
        self
    }

    pub fn list(
        &mut self,
        f: impl FnOnce(&mut RichTextElement),
        style: ListStyle,
        indent: u32,
    ) -> &mut Self {
        let mut nested = RichTextElement::new();
        f(&mut nested);
        self.elements.push(RichTextNode::RichTextList {
            style,
            indent,
            elements: nested.elements,
        });
        self
    }

    pub fn preformatted(&mut self, f: impl FnOnce(&mut RichTextSectionElement)) -> &mut Self {
        let elements = RichTextSectionElement::collect(f);
        self.elements.push(RichTextNode::RichTextPreformatted { elements });
        self
    }

    pub fn quote(&mut self, f: impl FnOnce(&mut RichTextSectionElement)) -> &mut Self {
        let elements = RichTextSectionElement::collect(f);
        self.elements.push(RichTextNode::RichTextQuote { elements });
        self
    }

    pub fn elements(&self) -> &[RichTextNode] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<RichTextNode> {
        self.elements
    }
}

/// Collects the styled runs of one rich text container.
#[derive(Debug, Clone, Default)]
pub struct RichTextSectionElement {
    elements: Vec<RichTextLeaf>,
}

impl RichTextSectionElement {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect(f: impl FnOnce(&mut Self)) -> Vec<RichTextLeaf> {
        let mut section = Self::new();
        f(&mut section);
        section.elements
    }

    pub fn text(&mut self, text: impl Into<String>, style: TextStyle) -> &mut Self {
        self.elements.push(RichTextLeaf::Text {
            text: text.into(),
            style,
        });
        self
    }

    pub fn link(
        &mut self,
        text: impl Into<String>,
        url: impl Into<String>,
        style: TextStyle,
    ) -> &mut Self {
        self.elements.push(RichTextLeaf::Link {
            url: url.into(),
            text: text.into(),
            style,
        });
        self
    }

    /// `name` is the shortcode without colons, e.g. `wave`.
    pub fn emoji(&mut self, name: impl Into<String>) -> &mut Self {
        self.elements.push(RichTextLeaf::Emoji { name: name.into() });
        self
    }

    pub fn elements(&self) -> &[RichTextLeaf] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<RichTextLeaf> {
        self.elements
    }
}
