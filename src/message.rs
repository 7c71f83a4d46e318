//! The root message builder.

use serde_derive::Serialize;
use tracing::{debug, instrument, warn};

use crate::action::ActionElement;
use crate::block::{Block, Text};
use crate::context::{ContextElement, TextBlock};
use crate::element::{
    supplied, Button, ChannelSelect, Checkboxes, ConversationFilter, ConversationSelect,
    DatePicker, ImageElement, MultiConversationsSelect, MultiSelect, MultiUsersSelect, Overflow,
    PlainTextInput, RadioButtons, Select, TimePicker, UserSelect,
};
use crate::error::SlackError;
use crate::option::{CheckboxOption, OverflowOption, RadioButtonOption, SelectOption};
use crate::rich_text::RichTextElement;
use crate::style::{ButtonStyle, InputTriggerAction};
use crate::transport::{HttpTransport, Transport};

/// Body of an incoming webhook post.
#[derive(Debug, Serialize)]
struct Payload<'a> {
    blocks: &'a [Block],
}

/// A webhook message under construction.
///
/// Every builder method appends exactly one block. Nothing is removed or
/// rewritten once appended, and the message can be inspected or sent any
/// number of times.
///
/// ```no_run
/// # async fn run() -> Result<(), slack_message::SlackError> {
/// use slack_message::{ButtonStyle, Message};
///
/// let delivered = Message::new("https://hooks.slack.com/services/T000/B000/XXXX")
///     .header("Deploy finished")
///     .markdown("*api* is live on `prod`")
///     .button("Roll back?", "Roll back", "rollback", "rollback", ButtonStyle::Danger)
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Message {
    webhook_url: String,
    blocks: Vec<Block>,
}

impl Message {
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            blocks: Vec::new(),
        }
    }

    fn push(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    // =========================================================================
    // Text and layout
    // =========================================================================

    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.push(Block::Section {
            text: Some(Text::plain(content)),
            fields: Vec::new(),
            accessory: None,
        })
    }

    #[must_use]
    pub fn markdown(self, content: impl Into<String>) -> Self {
        self.push(Block::Section {
            text: Some(Text::mrkdwn(content)),
            fields: Vec::new(),
            accessory: None,
        })
    }

    #[must_use]
    pub fn header(self, content: impl Into<String>) -> Self {
        self.push(Block::Header {
            text: Text::plain(content),
        })
    }

    #[must_use]
    pub fn divider(self) -> Self {
        self.push(Block::Divider)
    }

    /// Section made of text fields, laid out in two columns.
    #[must_use]
    pub fn text_block(self, f: impl FnOnce(&mut TextBlock)) -> Self {
        let mut block = TextBlock::new();
        f(&mut block);
        self.push(block.into_block())
    }

    #[must_use]
    pub fn context(self, f: impl FnOnce(&mut ContextElement)) -> Self {
        let mut context = ContextElement::new();
        f(&mut context);
        self.push(Block::Context {
            elements: context.into_elements(),
        })
    }

    /// Full-width image; `title` is shown above it when given.
    #[must_use]
    pub fn image(
        self,
        url: impl Into<String>,
        alt_text: impl Into<String>,
        title: Option<&str>,
    ) -> Self {
        self.push(Block::Image {
            image_url: url.into(),
            alt_text: alt_text.into(),
            title: supplied(title).map(Text::plain),
        })
    }

    #[must_use]
    pub fn section_image(
        self,
        text: impl Into<String>,
        url: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Self {
        self.push(Block::labelled(text, ImageElement::new(url, alt_text)))
    }

    #[must_use]
    pub fn action(self, f: impl FnOnce(&mut ActionElement)) -> Self {
        let mut actions = ActionElement::new();
        f(&mut actions);
        self.push(Block::Actions {
            elements: actions.into_elements(),
        })
    }

    #[must_use]
    pub fn rich_text(self, f: impl FnOnce(&mut RichTextElement)) -> Self {
        let mut rich_text = RichTextElement::new();
        f(&mut rich_text);
        self.push(Block::RichText {
            elements: rich_text.into_elements(),
        })
    }

    /// Remote file previously registered with Slack.
    #[must_use]
    pub fn file(self, url: impl Into<String>, external_id: impl Into<String>) -> Self {
        self.push(Block::File {
            external_id: external_id.into(),
            source: url.into(),
        })
    }

    // =========================================================================
    // Sections with an accessory
    // =========================================================================

    #[must_use]
    pub fn button(
        self,
        label: impl Into<String>,
        text: impl Into<String>,
        value: impl Into<String>,
        action_id: impl Into<String>,
        style: ButtonStyle,
    ) -> Self {
        let button = Button::new()
            .text(text)
            .value(value)
            .action_id(action_id)
            .style(style);
        self.push(Block::labelled(label, button))
    }

    /// Button that opens `url`; it still reports `value` and `action_id`.
    #[must_use]
    pub fn link_button(
        self,
        label: impl Into<String>,
        text: impl Into<String>,
        value: impl Into<String>,
        url: impl Into<String>,
        action_id: impl Into<String>,
    ) -> Self {
        let button = Button::new()
            .text(text)
            .value(value)
            .url(url)
            .action_id(action_id);
        self.push(Block::labelled(label, button))
    }

    #[must_use]
    pub fn select(
        self,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut SelectOption),
    ) -> Self {
        let mut options = SelectOption::new();
        f(&mut options);
        let select = Select::new()
            .placeholder(placeholder)
            .options(options.into_options())
            .action_id(action_id);
        self.push(Block::labelled(label, select))
    }

    #[must_use]
    pub fn multi_select(
        self,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut SelectOption),
    ) -> Self {
        let mut options = SelectOption::new();
        f(&mut options);
        let select = MultiSelect::new()
            .placeholder(placeholder)
            .options(options.into_options())
            .action_id(action_id);
        self.push(Block::labelled(label, select))
    }

    #[must_use]
    pub fn overflow(
        self,
        label: impl Into<String>,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut OverflowOption),
    ) -> Self {
        let mut options = OverflowOption::new();
        f(&mut options);
        let overflow = Overflow::new()
            .options(options.into_options())
            .action_id(action_id);
        self.push(Block::labelled(label, overflow))
    }

    #[must_use]
    pub fn checkboxes(
        self,
        label: impl Into<String>,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut CheckboxOption),
    ) -> Self {
        let mut options = CheckboxOption::new();
        f(&mut options);
        let checkboxes = Checkboxes::new()
            .options(options.into_options())
            .action_id(action_id);
        self.push(Block::labelled(label, checkboxes))
    }

    #[must_use]
    pub fn radio_buttons(
        self,
        label: impl Into<String>,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut RadioButtonOption),
    ) -> Self {
        let mut options = RadioButtonOption::new();
        f(&mut options);
        let radio_buttons = RadioButtons::new()
            .options(options.into_options())
            .action_id(action_id);
        self.push(Block::labelled(label, radio_buttons))
    }

    #[must_use]
    pub fn date_picker(
        self,
        label: impl Into<String>,
        placeholder: &str,
        action_id: &str,
        initial_date: Option<&str>,
    ) -> Self {
        let picker = DatePicker::configured(placeholder, action_id, initial_date);
        self.push(Block::labelled(label, picker))
    }

    #[must_use]
    pub fn time_picker(
        self,
        label: impl Into<String>,
        placeholder: &str,
        action_id: &str,
        initial_time: Option<&str>,
    ) -> Self {
        let picker = TimePicker::configured(placeholder, action_id, initial_time);
        self.push(Block::labelled(label, picker))
    }

    #[must_use]
    pub fn user_select(
        self,
        label: impl Into<String>,
        placeholder: &str,
        action_id: &str,
        initial_user: Option<&str>,
    ) -> Self {
        let select = UserSelect::configured(placeholder, action_id, initial_user);
        self.push(Block::labelled(label, select))
    }

    #[must_use]
    pub fn multi_users_select(
        self,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        action_id: impl Into<String>,
    ) -> Self {
        let select = MultiUsersSelect::new()
            .placeholder(placeholder)
            .action_id(action_id);
        self.push(Block::labelled(label, select))
    }

    #[must_use]
    pub fn channel_select(
        self,
        label: impl Into<String>,
        placeholder: &str,
        action_id: &str,
        initial_channel: Option<&str>,
    ) -> Self {
        let select = ChannelSelect::configured(placeholder, action_id, initial_channel);
        self.push(Block::labelled(label, select))
    }

    #[must_use]
    pub fn conversation_select(
        self,
        label: impl Into<String>,
        placeholder: &str,
        action_id: &str,
        initial_conversation: Option<&str>,
        filter: &ConversationFilter,
    ) -> Self {
        let select =
            ConversationSelect::configured(placeholder, action_id, initial_conversation, filter);
        self.push(Block::labelled(label, select))
    }

    #[must_use]
    pub fn multi_conversation_select(
        self,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        action_id: impl Into<String>,
    ) -> Self {
        let select = MultiConversationsSelect::new()
            .placeholder(placeholder)
            .action_id(action_id);
        self.push(Block::labelled(label, select))
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Text field. With an `action_id`, the block dispatches an interaction
    /// on `trigger` instead of waiting for a form submit.
    #[must_use]
    pub fn text_input(
        self,
        label: impl Into<String>,
        multiline: bool,
        action_id: Option<&str>,
        trigger: InputTriggerAction,
    ) -> Self {
        let input = PlainTextInput::new().multiline(multiline);
        let block = match supplied(action_id) {
            Some(action_id) => Block::Input {
                dispatch_action: true,
                element: input.action_id(action_id).dispatch_on(trigger).into(),
                label: Text::plain(label),
            },
            None => Block::input(label, input),
        };
        self.push(block)
    }

    #[must_use]
    pub fn select_input(
        self,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut SelectOption),
    ) -> Self {
        let mut options = SelectOption::new();
        f(&mut options);
        let select = Select::new()
            .placeholder(placeholder)
            .options(options.into_options())
            .action_id(action_id);
        self.push(Block::input(label, select))
    }

    #[must_use]
    pub fn multi_select_input(
        self,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut SelectOption),
    ) -> Self {
        let mut options = SelectOption::new();
        f(&mut options);
        let select = MultiSelect::new()
            .placeholder(placeholder)
            .options(options.into_options())
            .action_id(action_id);
        self.push(Block::input(label, select))
    }

    #[must_use]
    pub fn multi_users_select_input(
        self,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        action_id: impl Into<String>,
    ) -> Self {
        let select = MultiUsersSelect::new()
            .placeholder(placeholder)
            .action_id(action_id);
        self.push(Block::input(label, select))
    }

    #[must_use]
    pub fn date_picker_input(
        self,
        label: impl Into<String>,
        placeholder: &str,
        action_id: &str,
        initial_date: Option<&str>,
    ) -> Self {
        let picker = DatePicker::configured(placeholder, action_id, initial_date);
        self.push(Block::input(label, picker))
    }

    #[must_use]
    pub fn time_picker_input(
        self,
        label: impl Into<String>,
        placeholder: &str,
        action_id: &str,
        initial_time: Option<&str>,
    ) -> Self {
        let picker = TimePicker::configured(placeholder, action_id, initial_time);
        self.push(Block::input(label, picker))
    }

    #[must_use]
    pub fn checkboxes_input(
        self,
        label: impl Into<String>,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut CheckboxOption),
    ) -> Self {
        let mut options = CheckboxOption::new();
        f(&mut options);
        let checkboxes = Checkboxes::new()
            .options(options.into_options())
            .action_id(action_id);
        self.push(Block::input(label, checkboxes))
    }

    #[must_use]
    pub fn radio_buttons_input(
        self,
        label: impl Into<String>,
        action_id: impl Into<String>,
        f: impl FnOnce(&mut RadioButtonOption),
    ) -> Self {
        let mut options = RadioButtonOption::new();
        f(&mut options);
        let radio_buttons = RadioButtons::new()
            .options(options.into_options())
            .action_id(action_id);
        self.push(Block::input(label, radio_buttons))
    }

    // =========================================================================
    // Output
    // =========================================================================

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The `{"blocks": [...]}` document.
    ///
    /// # Errors
    ///
    /// Returns error if the blocks cannot be encoded.
    pub fn to_value(&self) -> Result<serde_json::Value, SlackError> {
        Ok(serde_json::to_value(Payload {
            blocks: &self.blocks,
        })?)
    }

    /// The `{"blocks": [...]}` document as JSON text, as posted to the webhook.
    ///
    /// # Errors
    ///
    /// Returns error if the blocks cannot be encoded.
    pub fn to_payload(&self) -> Result<String, SlackError> {
        Ok(serde_json::to_string(&Payload {
            blocks: &self.blocks,
        })?)
    }

    /// Post the message to the webhook with a default HTTP client.
    ///
    /// Returns `Ok(true)` if the webhook answered 200 and `Ok(false)` for any
    /// other status. The message is left as it was either way.
    ///
    /// # Errors
    ///
    /// Returns error if the payload cannot be encoded or the request fails.
    pub async fn send(&self) -> Result<bool, SlackError> {
        self.send_with(&HttpTransport::default()).await
    }

    /// Like [`Message::send`], through the given transport.
    ///
    /// # Errors
    ///
    /// Returns error if the payload cannot be encoded or the transport fails.
    #[instrument(skip(self, transport), fields(blocks = self.blocks.len()))]
    pub async fn send_with<T>(&self, transport: &T) -> Result<bool, SlackError>
    where
        T: Transport + ?Sized,
    {
        let payload = self.to_payload()?;
        let status = transport.post_payload(&self.webhook_url, &payload).await?;

        if status != 200 {
            warn!(status, "Slack webhook rejected message");
            return Ok(false);
        }

        debug!("Message posted to Slack webhook");

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HOOK: &str = "https://hooks.slack.com/services/T000/B000/XXXX";

    #[test]
    fn test_blocks_follow_call_order() {
        let message = Message::new(HOOK)
            .header("Weekly report")
            .divider()
            .text("plain")
            .markdown("*bold*")
            .file("https://x/report.pdf", "report-42");

        let value = message.to_value().unwrap();
        let kinds: Vec<_> = value["blocks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|block| block["type"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, ["header", "divider", "section", "section", "file"]);
        assert_eq!(message.blocks().len(), 5);
    }

    #[test]
    fn test_button_section() {
        let message =
            Message::new(HOOK).button("Label", "Click me", "v1", "a1", ButtonStyle::Primary);

        assert_eq!(
            message.to_value().unwrap(),
            json!({"blocks": [{
                "type": "section",
                "text": {"type": "mrkdwn", "text": "Label"},
                "accessory": {
                    "type": "button",
                    "text": {"type": "plain_text", "text": "Click me", "emoji": true},
                    "value": "v1",
                    "style": "primary",
                    "action_id": "a1"
                }
            }]})
        );
    }

    #[test]
    fn test_link_button_carries_url_and_value() {
        let message = Message::new(HOOK).link_button(
            "Docs",
            "Open",
            "docs",
            "https://example.com/docs",
            "open_docs",
        );
        let accessory = &message.to_value().unwrap()["blocks"][0]["accessory"];

        assert_eq!(accessory["type"], "button");
        assert_eq!(accessory["value"], "docs");
        assert_eq!(accessory["url"], "https://example.com/docs");
        assert!(accessory.get("style").is_none());
    }

    #[test]
    fn test_date_picker_initial_date_presence() {
        let message = Message::new(HOOK)
            .date_picker("When?", "Pick a date", "d1", None)
            .date_picker("When?", "Pick a date", "d2", Some("2024-01-01"))
            .date_picker_input("Due", "Pick a date", "d3", Some("2024-02-02"));
        let value = message.to_value().unwrap();

        assert!(value["blocks"][0]["accessory"].get("initial_date").is_none());
        assert_eq!(value["blocks"][1]["accessory"]["initial_date"], "2024-01-01");
        assert_eq!(value["blocks"][2]["element"]["initial_date"], "2024-02-02");
    }

    #[test]
    fn test_text_input_without_action_id() {
        let message =
            Message::new(HOOK).text_input("Name", false, None, InputTriggerAction::OnEnterPressed);

        assert_eq!(
            message.to_value().unwrap()["blocks"][0],
            json!({
                "type": "input",
                "element": {"type": "plain_text_input", "multiline": false},
                "label": {"type": "plain_text", "text": "Name", "emoji": true}
            })
        );
    }

    #[test]
    fn test_text_input_with_action_id_dispatches() {
        let message = Message::new(HOOK).text_input(
            "Name",
            true,
            Some("a1"),
            InputTriggerAction::OnEnterPressed,
        );

        assert_eq!(
            message.to_value().unwrap()["blocks"][0],
            json!({
                "type": "input",
                "dispatch_action": true,
                "element": {
                    "type": "plain_text_input",
                    "multiline": true,
                    "action_id": "a1",
                    "dispatch_action_config": {"trigger_actions_on": ["on_enter_pressed"]}
                },
                "label": {"type": "plain_text", "text": "Name", "emoji": true}
            })
        );
    }

    #[test]
    fn test_image_title_only_when_supplied() {
        let message = Message::new(HOOK)
            .image("https://x/a.png", "a", None)
            .image("https://x/b.png", "b", Some("Chart"));
        let value = message.to_value().unwrap();

        assert!(value["blocks"][0].get("title").is_none());
        assert_eq!(
            value["blocks"][1]["title"],
            json!({"type": "plain_text", "text": "Chart", "emoji": true})
        );
    }

    #[test]
    fn test_conversation_select_filter() {
        let message = Message::new(HOOK)
            .conversation_select("Post to", "Pick", "c1", None, &ConversationFilter::default())
            .conversation_select(
                "Post to",
                "Pick",
                "c2",
                None,
                &ConversationFilter::default()
                    .include(["im", "mpim"])
                    .exclude_bot_users(true),
            );
        let value = message.to_value().unwrap();

        assert!(value["blocks"][0]["accessory"].get("filter").is_none());
        assert_eq!(
            value["blocks"][1]["accessory"]["filter"],
            json!({"include": ["im", "mpim"], "exclude_bot_users": true})
        );
    }

    #[test]
    fn test_option_bearing_sections_and_inputs() {
        let message = Message::new(HOOK)
            .select("Team", "Choose", "team", |o| {
                o.option("Core", "core").option("Web", "web");
            })
            .multi_select_input("Tags", "Choose", "tags", |o| {
                o.option("bug", "bug");
            })
            .overflow("More", "more", |o| {
                o.option("Edit", "edit");
            })
            .checkboxes_input("Notify", "notify", |o| {
                o.option("Email", "email", Some("Once a day"));
            })
            .radio_buttons("Size", "size", |_| {});
        let value = message.to_value().unwrap();

        assert_eq!(value["blocks"][0]["accessory"]["type"], "static_select");
        assert_eq!(value["blocks"][0]["accessory"]["options"][1]["value"], "web");
        assert_eq!(value["blocks"][1]["type"], "input");
        assert_eq!(value["blocks"][1]["element"]["type"], "multi_static_select");
        assert_eq!(value["blocks"][2]["accessory"]["type"], "overflow");
        assert_eq!(
            value["blocks"][3]["element"]["options"][0]["description"]["text"],
            "Once a day"
        );
        assert_eq!(value["blocks"][4]["accessory"]["options"], json!([]));
    }

    #[test]
    fn test_callback_runs_once_before_append() {
        let mut calls = 0;
        let message = Message::new(HOOK).context(|c| {
            calls += 1;
            c.markdown("by *ops*");
        });

        assert_eq!(calls, 1);
        assert_eq!(
            message.to_value().unwrap()["blocks"][0],
            json!({"type": "context", "elements": [{"type": "mrkdwn", "text": "by *ops*"}]})
        );
    }

    #[test]
    fn test_action_and_rich_text_blocks() {
        let message = Message::new(HOOK)
            .action(|a| {
                a.button("Go", "go", "go", ButtonStyle::default());
            })
            .rich_text(|r| {
                r.quote(|s| {
                    s.emoji("tada");
                });
            });
        let value = message.to_value().unwrap();

        assert_eq!(value["blocks"][0]["type"], "actions");
        assert_eq!(value["blocks"][0]["elements"][0]["style"], "default");
        assert_eq!(value["blocks"][1]["type"], "rich_text");
        assert_eq!(value["blocks"][1]["elements"][0]["type"], "rich_text_quote");
    }

    #[test]
    fn test_to_payload_is_repeatable() {
        let message = Message::new(HOOK).text("hi");
        let first = message.to_payload().unwrap();

        assert_eq!(first, message.to_payload().unwrap());
        assert_eq!(
            first,
            concat!(
                r#"{"blocks":[{"type":"section","#,
                r#""text":{"type":"plain_text","text":"hi","emoji":true}}]}"#
            )
        );
    }

    #[test]
    fn test_time_picker_initial_time_presence() {
        let message = Message::new(HOOK)
            .time_picker("At", "Pick a time", "t1", Some("09:30"))
            .time_picker("At", "Pick a time", "t2", None)
            .time_picker("At", "Pick a time", "t3", Some(""));
        let value = message.to_value().unwrap();

        assert_eq!(
            value["blocks"][0],
            json!({
                "type": "section",
                "text": {"type": "mrkdwn", "text": "At"},
                "accessory": {
                    "type": "timepicker",
                    "placeholder": {"type": "plain_text", "text": "Pick a time", "emoji": true},
                    "action_id": "t1",
                    "initial_time": "09:30"
                }
            })
        );
        assert!(value["blocks"][1]["accessory"].get("initial_time").is_none());
        assert!(value["blocks"][2]["accessory"].get("initial_time").is_none());
    }

    #[test]
    fn test_time_picker_input_wraps_element() {
        let message = Message::new(HOOK)
            .time_picker_input("Start", "Pick a time", "t1", None)
            .time_picker_input("Start", "Pick a time", "t2", Some(""))
            .time_picker_input("Start", "Pick a time", "t3", Some("18:00"));
        let value = message.to_value().unwrap();

        assert_eq!(
            value["blocks"][0],
            json!({
                "type": "input",
                "element": {
                    "type": "timepicker",
                    "placeholder": {"type": "plain_text", "text": "Pick a time", "emoji": true},
                    "action_id": "t1"
                },
                "label": {"type": "plain_text", "text": "Start", "emoji": true}
            })
        );
        assert!(value["blocks"][1]["element"].get("initial_time").is_none());
        assert_eq!(value["blocks"][2]["element"]["initial_time"], "18:00");
    }

    #[test]
    fn test_channel_select_initial_channel_presence() {
        let message = Message::new(HOOK)
            .channel_select("Post to", "Pick a channel", "c1", Some("C1"))
            .channel_select("Post to", "Pick a channel", "c2", None)
            .channel_select("Post to", "Pick a channel", "c3", Some(""));
        let value = message.to_value().unwrap();

        assert_eq!(
            value["blocks"][0],
            json!({
                "type": "section",
                "text": {"type": "mrkdwn", "text": "Post to"},
                "accessory": {
                    "type": "channels_select",
                    "placeholder": {"type": "plain_text", "text": "Pick a channel", "emoji": true},
                    "action_id": "c1",
                    "initial_channel": "C1"
                }
            })
        );
        assert!(value["blocks"][1]["accessory"].get("initial_channel").is_none());
        assert!(value["blocks"][2]["accessory"].get("initial_channel").is_none());
    }

    #[test]
    fn test_user_selects() {
        let message = Message::new(HOOK)
            .user_select("Owner", "Pick a user", "u1", Some("U1"))
            .user_select("Owner", "Pick a user", "u2", Some(""))
            .multi_users_select("Reviewers", "Pick users", "u3")
            .multi_users_select_input("Watchers", "Pick users", "u4");
        let value = message.to_value().unwrap();

        assert_eq!(value["blocks"][0]["accessory"]["type"], "users_select");
        assert_eq!(value["blocks"][0]["accessory"]["initial_user"], "U1");
        assert!(value["blocks"][1]["accessory"].get("initial_user").is_none());
        assert_eq!(
            value["blocks"][2],
            json!({
                "type": "section",
                "text": {"type": "mrkdwn", "text": "Reviewers"},
                "accessory": {
                    "type": "multi_users_select",
                    "placeholder": {"type": "plain_text", "text": "Pick users", "emoji": true},
                    "action_id": "u3"
                }
            })
        );
        assert_eq!(
            value["blocks"][3],
            json!({
                "type": "input",
                "element": {
                    "type": "multi_users_select",
                    "placeholder": {"type": "plain_text", "text": "Pick users", "emoji": true},
                    "action_id": "u4"
                },
                "label": {"type": "plain_text", "text": "Watchers", "emoji": true}
            })
        );
    }

    #[test]
    fn test_multi_conversation_select_section() {
        let message = Message::new(HOOK).multi_conversation_select("Share", "Pick", "m1");

        assert_eq!(
            message.to_value().unwrap()["blocks"][0],
            json!({
                "type": "section",
                "text": {"type": "mrkdwn", "text": "Share"},
                "accessory": {
                    "type": "multi_conversations_select",
                    "placeholder": {"type": "plain_text", "text": "Pick", "emoji": true},
                    "action_id": "m1"
                }
            })
        );
    }

    #[test]
    fn test_option_inputs_wrap_element() {
        let message = Message::new(HOOK)
            .select_input("Priority", "Pick one", "p1", |o| {
                o.option("High", "high");
            })
            .radio_buttons_input("Size", "s1", |o| {
                o.option("*S*", "s", Some("small"))
                    .option("*L*", "l", Some(""));
            });
        let value = message.to_value().unwrap();

        assert_eq!(
            value["blocks"][0],
            json!({
                "type": "input",
                "element": {
                    "type": "static_select",
                    "placeholder": {"type": "plain_text", "text": "Pick one", "emoji": true},
                    "options": [{
                        "text": {"type": "plain_text", "text": "High", "emoji": true},
                        "value": "high"
                    }],
                    "action_id": "p1"
                },
                "label": {"type": "plain_text", "text": "Priority", "emoji": true}
            })
        );
        assert_eq!(
            value["blocks"][1],
            json!({
                "type": "input",
                "element": {
                    "type": "radio_buttons",
                    "options": [
                        {
                            "text": {"type": "mrkdwn", "text": "*S*"},
                            "value": "s",
                            "description": {"type": "mrkdwn", "text": "small"}
                        },
                        {"text": {"type": "mrkdwn", "text": "*L*"}, "value": "l"}
                    ],
                    "action_id": "s1"
                },
                "label": {"type": "plain_text", "text": "Size", "emoji": true}
            })
        );
    }

    #[test]
    fn test_section_image_accessory() {
        let message = Message::new(HOOK).section_image("*Build* passed", "https://x/ok.png", "ok");

        assert_eq!(
            message.to_value().unwrap()["blocks"][0],
            json!({
                "type": "section",
                "text": {"type": "mrkdwn", "text": "*Build* passed"},
                "accessory": {"type": "image", "image_url": "https://x/ok.png", "alt_text": "ok"}
            })
        );
    }

    #[test]
    fn test_text_block_sections() {
        let message = Message::new(HOOK)
            .text_block(|_| {})
            .text_block(|t| {
                t.markdown("*Env:*").text("prod");
            });
        let value = message.to_value().unwrap();

        assert_eq!(value["blocks"][0], json!({"type": "section"}));
        assert_eq!(
            value["blocks"][1],
            json!({
                "type": "section",
                "fields": [
                    {"type": "mrkdwn", "text": "*Env:*"},
                    {"type": "plain_text", "text": "prod", "emoji": true}
                ]
            })
        );
    }
}
