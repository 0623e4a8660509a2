//! Webhook embed payload types.
//!
//! A subset of the Discord execute-webhook body: one message carrying rich
//! embeds.
//!
//! See: <https://discord.com/developers/docs/resources/webhook#execute-webhook>

use serde::Serialize;

/// Execute-webhook request body.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage {
    pub embeds: Vec<Embed>,
}

/// A rich embed card.
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    /// RGB color of the side bar.
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    /// RFC 3339 timestamp shown in the card footer.
    pub timestamp: String,
}

/// Discord rejects embed field values longer than this many characters.
pub const MAX_FIELD_VALUE_CHARS: usize = 1024;

/// A name/value row inside an embed.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    /// Values longer than [`MAX_FIELD_VALUE_CHARS`] are cut and end in `…`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: clamp_value(value.into()),
            inline: false,
        }
    }

    #[must_use]
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::new(name, value)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

fn clamp_value(mut value: String) -> String {
    if value.chars().count() > MAX_FIELD_VALUE_CHARS
        && let Some((cut, _)) = value.char_indices().nth(MAX_FIELD_VALUE_CHARS - 1)
    {
        value.truncate(cut);
        value.push('…');
    }
    value
}
