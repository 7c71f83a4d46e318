use serde_derive::Serialize;

/// Colour scheme of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Green call-to-action button.
    Primary,
    /// Red destructive button.
    Danger,
    #[default]
    Default,
}

/// Marker style of a rich text list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    Ordered,
    #[default]
    Bullet,
}

/// When a plain text input dispatches its `block_actions` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputTriggerAction {
    OnCharacterEntered,
    #[default]
    OnEnterPressed,
}
