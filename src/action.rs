use crate::element::{
    Button, ChannelSelect, Checkboxes, ConversationFilter, ConversationSelect, DatePicker, Element,
    RadioButtons, Select, TimePicker, UserSelect,
};
use crate::option::{CheckboxOption, RadioButtonOption, SelectOption};
use crate::style::ButtonStyle;

/// Collects the interactive elements of an actions block.
#[derive(Debug, Clone, Default)]
pub struct ActionElement {
    elements: Vec<Element>,
}

impl ActionElement {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    pub fn button(
        &mut self,
        text: impl Into<String>,
        value: impl Into<String>,
        action_id: impl Into<String>,
        style: ButtonStyle,
    ) -> &mut Self {
        self.push(
            Button::new()
                .text(text)
                .value(value)
                .action_id(action_id)
                .style(style),
        )
    }

    pub fn date_picker(
        &mut self,
        placeholder: &str,
        action_id: &str,
        initial_date: Option<&str>,
    ) -> &mut Self {
        self.push(DatePicker::configured(placeholder, action_id, initial_date))
    }

    pub fn time_picker(
        &mut self,
        placeholder: &str,
        action_id: &str,
        initial_time: Option<&str>,
    ) -> &mut Self {
        self.push(TimePicker::configured(placeholder, action_id, initial_time))
    }

    pub fn checkboxes(
        &mut self,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut CheckboxOption),
    ) -> &mut Self {
        let mut options = CheckboxOption::new();
        f(&mut options);
        self.push(
            Checkboxes::new()
                .options(options.into_options())
                .action_id(action_id),
        )
    }

    pub fn radio_buttons(
        &mut self,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut RadioButtonOption),
    ) -> &mut Self {
        let mut options = RadioButtonOption::new();
        f(&mut options);
        self.push(
            RadioButtons::new()
                .options(options.into_options())
                .action_id(action_id),
        )
    }

    pub fn conversation_select(
        &mut self,
        placeholder: &str,
        action_id: &str,
        initial_conversation: Option<&str>,
        filter: &ConversationFilter,
    ) -> &mut Self {
        self.push(ConversationSelect::configured(
            placeholder,
            action_id,
            initial_conversation,
            filter,
        ))
    }

    pub fn channel_select(
        &mut self,
        placeholder: &str,
        action_id: &str,
        initial_channel: Option<&str>,
    ) -> &mut Self {
        self.push(ChannelSelect::configured(
            placeholder,
            action_id,
            initial_channel,
        ))
    }

    pub fn user_select(
        &mut self,
        placeholder: &str,
        action_id: &str,
        initial_user: Option<&str>,
    ) -> &mut Self {
        self.push(UserSelect::configured(placeholder, action_id, initial_user))
    }

    /// Static select without a placeholder.
    pub fn select(
        &mut self,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut SelectOption),
    ) -> &mut Self {
        let mut options = SelectOption::new();
        f(&mut options);
        self.push(
            Select::new()
                .options(options.into_options())
                .action_id(action_id),
        )
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}
