//! Option lists for selects, overflow menus, checkboxes and radio buttons.

use serde_derive::Serialize;

use crate::block::Text;

/// A single selectable choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionObject {
    pub text: Text,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Text>,
}

/// Options rendered as plain text, for static selects.
#[derive(Debug, Clone, Default)]
pub struct SelectOption {
    options: Vec<OptionObject>,
}

impl SelectOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option(&mut self, display: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.options.push(OptionObject {
            text: Text::plain(display),
            value: value.into(),
            description: None,
        });
        self
    }

    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }

    pub fn into_options(self) -> Vec<OptionObject> {
        self.options
    }
}

/// Overflow menus take the same plain text options as static selects.
pub type OverflowOption = SelectOption;

/// Options rendered as markdown, each with an optional description line.
#[derive(Debug, Clone, Default)]
pub struct CheckboxOption {
    options: Vec<OptionObject>,
}

impl CheckboxOption {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty description is treated as absent.
    pub fn option(
        &mut self,
        display: impl Into<String>,
        value: impl Into<String>,
        description: Option<&str>,
    ) -> &mut Self {
        self.options.push(OptionObject {
            text: Text::mrkdwn(display),
            value: value.into(),
            description: description
                .filter(|description| !description.is_empty())
                .map(Text::mrkdwn),
        });
        self
    }

    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }

    pub fn into_options(self) -> Vec<OptionObject> {
        self.options
    }
}

/// Radio buttons share the checkbox option shape.
pub type RadioButtonOption = CheckboxOption;
