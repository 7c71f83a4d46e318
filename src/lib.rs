//! Fluent builder for Slack Block Kit messages sent through incoming webhooks.
//!
//! A [`Message`] collects blocks through chained calls. Composite blocks take
//! a closure that receives a fresh child builder, e.g. [`ActionElement`] or
//! [`SelectOption`], and the result is appended once the closure returns.
//! [`Message::send`] posts the `{"blocks": [...]}` document as the form field
//! `payload`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod block;
pub mod context;
pub mod element;
pub mod error;
pub mod message;
pub mod option;
pub mod rich_text;
pub mod style;
pub mod transport;

pub use action::ActionElement;
pub use block::{Block, Text};
pub use context::{ContextElement, ContextItem, TextBlock};
pub use element::{
    Button, ChannelSelect, Checkboxes, ConversationFilter, ConversationSelect, DatePicker,
    DispatchActionConfig, Element, ImageElement, MultiConversationsSelect, MultiSelect,
    MultiUsersSelect, Overflow, PlainTextInput, RadioButtons, Select, TimePicker, UserSelect,
};
pub use error::SlackError;
pub use message::Message;
pub use option::{CheckboxOption, OptionObject, OverflowOption, RadioButtonOption, SelectOption};
pub use rich_text::{
    RichTextElement, RichTextLeaf, RichTextNode, RichTextSectionElement, TextStyle,
};
pub use style::{ButtonStyle, InputTriggerAction, ListStyle};
pub use transport::{HttpTransport, Transport};
