//! Interactive and display elements.
//!
//! Every element carries its Block Kit `type` from construction. Setters
//! consume and return the element so they chain; optional fields that were
//! never set are left out of the serialized document.
//!
//! See: <https://api.slack.com/reference/block-kit/block-elements>

use serde_derive::Serialize;

use crate::block::Text;
use crate::error::SlackError;
use crate::option::OptionObject;
use crate::style::{ButtonStyle, InputTriggerAction};

/// Any element that can sit in an accessory, actions block or input block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Element {
    Button(Button),
    Select(Select),
    MultiSelect(MultiSelect),
    Overflow(Overflow),
    DatePicker(DatePicker),
    TimePicker(TimePicker),
    UserSelect(UserSelect),
    MultiUsersSelect(MultiUsersSelect),
    ChannelSelect(ChannelSelect),
    ConversationSelect(ConversationSelect),
    MultiConversationsSelect(MultiConversationsSelect),
    Checkboxes(Checkboxes),
    RadioButtons(RadioButtons),
    PlainTextInput(PlainTextInput),
    Image(ImageElement),
}

macro_rules! impl_from_element {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(element: $ty) -> Self {
                    Self::$variant(element)
                }
            }

            impl $ty {
                /// The element document as sent to Slack.
                pub fn to_value(&self) -> Result<serde_json::Value, SlackError> {
                    Ok(serde_json::to_value(self)?)
                }
            }
        )*
    };
}

impl_from_element! {
    Button => Button,
    Select => Select,
    MultiSelect => MultiSelect,
    Overflow => Overflow,
    DatePicker => DatePicker,
    TimePicker => TimePicker,
    UserSelect => UserSelect,
    MultiUsersSelect => MultiUsersSelect,
    ChannelSelect => ChannelSelect,
    ConversationSelect => ConversationSelect,
    MultiConversationsSelect => MultiConversationsSelect,
    Checkboxes => Checkboxes,
    RadioButtons => RadioButtons,
    PlainTextInput => PlainTextInput,
    Image => ImageElement,
}

impl Element {
    /// The Block Kit `type` discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Button(e) => e.ty,
            Self::Select(e) => e.ty,
            Self::MultiSelect(e) => e.ty,
            Self::Overflow(e) => e.ty,
            Self::DatePicker(e) => e.ty,
            Self::TimePicker(e) => e.ty,
            Self::UserSelect(e) => e.ty,
            Self::MultiUsersSelect(e) => e.ty,
            Self::ChannelSelect(e) => e.ty,
            Self::ConversationSelect(e) => e.ty,
            Self::MultiConversationsSelect(e) => e.ty,
            Self::Checkboxes(e) => e.ty,
            Self::RadioButtons(e) => e.ty,
            Self::PlainTextInput(e) => e.ty,
            Self::Image(e) => e.ty,
        }
    }

    /// The document of the wrapped element.
    ///
    /// # Errors
    ///
    /// Returns error if the element cannot be encoded.
    pub fn to_value(&self) -> Result<serde_json::Value, SlackError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Treats an empty string the same as no value.
pub(crate) fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

// =============================================================================
// Buttons
// =============================================================================

/// Clickable button. With a `url` set it opens the link as well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Button {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "button",
            text: None,
            value: None,
            url: None,
            style: None,
            action_id: None,
        }
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(Text::plain(text));
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

// =============================================================================
// Option-bearing elements
// =============================================================================

/// Single choice from a static list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Select {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "static_select",
            placeholder: None,
            options: None,
            action_id: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Text::plain(placeholder));
        self
    }

    #[must_use]
    pub fn options(mut self, options: Vec<OptionObject>) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

/// Several choices from a static list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiSelect {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
}

impl Default for MultiSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiSelect {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "multi_static_select",
            placeholder: None,
            options: None,
            action_id: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Text::plain(placeholder));
        self
    }

    #[must_use]
    pub fn options(mut self, options: Vec<OptionObject>) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

/// The "..." menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overflow {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
}

impl Default for Overflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Overflow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "overflow",
            options: None,
            action_id: None,
        }
    }

    #[must_use]
    pub fn options(mut self, options: Vec<OptionObject>) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checkboxes {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
}

impl Default for Checkboxes {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkboxes {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "checkboxes",
            options: None,
            action_id: None,
        }
    }

    #[must_use]
    pub fn options(mut self, options: Vec<OptionObject>) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioButtons {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
}

impl Default for RadioButtons {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioButtons {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "radio_buttons",
            options: None,
            action_id: None,
        }
    }

    #[must_use]
    pub fn options(mut self, options: Vec<OptionObject>) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

// =============================================================================
// Pickers
// =============================================================================

/// Calendar picker. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatePicker {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_date: Option<String>,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePicker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "datepicker",
            placeholder: None,
            action_id: None,
            initial_date: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Text::plain(placeholder));
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    #[must_use]
    pub fn initial_date(mut self, initial_date: impl Into<String>) -> Self {
        self.initial_date = Some(initial_date.into());
        self
    }

    pub(crate) fn configured(placeholder: &str, action_id: &str, initial: Option<&str>) -> Self {
        let picker = Self::new().placeholder(placeholder).action_id(action_id);
        match supplied(initial) {
            Some(date) => picker.initial_date(date),
            None => picker,
        }
    }
}

/// Clock picker. Times are `HH:mm`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePicker {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_time: Option<String>,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TimePicker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "timepicker",
            placeholder: None,
            action_id: None,
            initial_time: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Text::plain(placeholder));
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    #[must_use]
    pub fn initial_time(mut self, initial_time: impl Into<String>) -> Self {
        self.initial_time = Some(initial_time.into());
        self
    }

    pub(crate) fn configured(placeholder: &str, action_id: &str, initial: Option<&str>) -> Self {
        let picker = Self::new().placeholder(placeholder).action_id(action_id);
        match supplied(initial) {
            Some(time) => picker.initial_time(time),
            None => picker,
        }
    }
}

// =============================================================================
// Workspace entity selects
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSelect {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_user: Option<String>,
}

impl Default for UserSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSelect {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "users_select",
            placeholder: None,
            action_id: None,
            initial_user: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Text::plain(placeholder));
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    #[must_use]
    pub fn initial_user(mut self, initial_user: impl Into<String>) -> Self {
        self.initial_user = Some(initial_user.into());
        self
    }

    pub(crate) fn configured(placeholder: &str, action_id: &str, initial: Option<&str>) -> Self {
        let select = Self::new().placeholder(placeholder).action_id(action_id);
        match supplied(initial) {
            Some(user) => select.initial_user(user),
            None => select,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiUsersSelect {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
}

impl Default for MultiUsersSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiUsersSelect {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "multi_users_select",
            placeholder: None,
            action_id: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Text::plain(placeholder));
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSelect {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_channel: Option<String>,
}

impl Default for ChannelSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelSelect {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "channels_select",
            placeholder: None,
            action_id: None,
            initial_channel: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Text::plain(placeholder));
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    #[must_use]
    pub fn initial_channel(mut self, initial_channel: impl Into<String>) -> Self {
        self.initial_channel = Some(initial_channel.into());
        self
    }

    pub(crate) fn configured(placeholder: &str, action_id: &str, initial: Option<&str>) -> Self {
        let select = Self::new().placeholder(placeholder).action_id(action_id);
        match supplied(initial) {
            Some(channel) => select.initial_channel(channel),
            None => select,
        }
    }
}

/// Narrows which conversations a [`ConversationSelect`] lists.
///
/// Only the parts that restrict anything are serialized: an empty `include`
/// and unset flags are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    include: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    exclude_bot_users: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    exclude_external_shared_channels: bool,
}

impl ConversationFilter {
    /// Conversation kinds to list: `im`, `mpim`, `private`, `public`.
    #[must_use]
    pub fn include<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = kinds.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn exclude_bot_users(mut self, exclude: bool) -> Self {
        self.exclude_bot_users = exclude;
        self
    }

    #[must_use]
    pub fn exclude_external_shared_channels(mut self, exclude: bool) -> Self {
        self.exclude_external_shared_channels = exclude;
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.include.is_empty() && !self.exclude_bot_users && !self.exclude_external_shared_channels
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSelect {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_conversation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<ConversationFilter>,
}

impl Default for ConversationSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSelect {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "conversations_select",
            placeholder: None,
            action_id: None,
            initial_conversation: None,
            filter: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Text::plain(placeholder));
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    #[must_use]
    pub fn initial_conversation(mut self, initial_conversation: impl Into<String>) -> Self {
        self.initial_conversation = Some(initial_conversation.into());
        self
    }

    /// Adds restrictions to the conversation filter.
    ///
    /// Only non-empty `include` and `true` flags are written; repeated calls
    /// accumulate. When nothing restricts the list, no `filter` is emitted.
    #[must_use]
    pub fn filter(
        mut self,
        include: &[&str],
        exclude_bot_users: bool,
        exclude_external_shared_channels: bool,
    ) -> Self {
        let mut filter = self.filter.take().unwrap_or_default();
        if !include.is_empty() {
            filter = filter.include(include.iter().copied());
        }
        if exclude_bot_users {
            filter = filter.exclude_bot_users(true);
        }
        if exclude_external_shared_channels {
            filter = filter.exclude_external_shared_channels(true);
        }
        self.filter = (!filter.is_empty()).then_some(filter);
        self
    }

    #[must_use]
    pub fn with_filter(self, filter: &ConversationFilter) -> Self {
        let include: Vec<&str> = filter.include.iter().map(String::as_str).collect();
        self.filter(
            &include,
            filter.exclude_bot_users,
            filter.exclude_external_shared_channels,
        )
    }

    pub(crate) fn configured(
        placeholder: &str,
        action_id: &str,
        initial: Option<&str>,
        filter: &ConversationFilter,
    ) -> Self {
        let select = Self::new().placeholder(placeholder).action_id(action_id);
        let select = match supplied(initial) {
            Some(conversation) => select.initial_conversation(conversation),
            None => select,
        };
        select.with_filter(filter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiConversationsSelect {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
}

impl Default for MultiConversationsSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiConversationsSelect {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "multi_conversations_select",
            placeholder: None,
            action_id: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Text::plain(placeholder));
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }
}

// =============================================================================
// Inputs and images
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchActionConfig {
    pub trigger_actions_on: Vec<InputTriggerAction>,
}

/// Free text field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlainTextInput {
    #[serde(rename = "type")]
    ty: &'static str,
    multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dispatch_action_config: Option<DispatchActionConfig>,
}

impl Default for PlainTextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ty: "plain_text_input",
            multiline: false,
            action_id: None,
            dispatch_action_config: None,
        }
    }

    #[must_use]
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    #[must_use]
    pub fn dispatch_on(mut self, trigger: InputTriggerAction) -> Self {
        self.dispatch_action_config = Some(DispatchActionConfig {
            trigger_actions_on: vec![trigger],
        });
        self
    }
}

/// Non-interactive image, used as a section accessory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    #[serde(rename = "type")]
    ty: &'static str,
    image_url: String,
    alt_text: String,
}

impl ImageElement {
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            ty: "image",
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}
