//! Server-originated message banners. The host page embeds them as a JSON
//! array in `<script id="portal-messages" type="application/json">`, each entry
//! carrying the framework's level tag and the text to display.

use crate::app_lib::AppError;
use serde::Deserialize;

/// Banners disappear on their own after this delay.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// DOM id of the script element carrying the messages.
pub const MESSAGES_ELEMENT_ID: &str = "portal-messages";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
    Info,
}

impl FlashLevel {
    /// Maps a server tag such as `error` or `success`. Unknown tags render as info.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" | "danger" | "warning" => Self::Error,
            _ => Self::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

#[derive(Deserialize)]
struct RawMessage {
    #[serde(default)]
    level: String,
    text: String,
}

/// Parses the embedded message list, dropping blank entries.
pub fn parse_messages(json: &str) -> Result<Vec<FlashMessage>, AppError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let raw: Vec<RawMessage> = serde_json::from_str(trimmed)
        .map_err(|err| AppError::Parse(format!("Invalid server messages: {err}")))?;

    Ok(raw
        .into_iter()
        .filter(|message| !message.text.trim().is_empty())
        .map(|message| FlashMessage {
            level: FlashLevel::from_tag(&message.level),
            text: message.text.trim().to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_messages_maps_levels() {
        let messages = parse_messages(
            r#"[
                {"level": "error", "text": "Invalid credentials."},
                {"level": "success", "text": " New code sent to your email. "},
                {"level": "debug", "text": "ignored level"},
                {"text": "no level"}
            ]"#,
        )
        .unwrap();

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].level, FlashLevel::Error);
        assert_eq!(messages[1].text, "New code sent to your email.");
        assert_eq!(messages[1].level, FlashLevel::Success);
        assert_eq!(messages[2].level, FlashLevel::Info);
        assert_eq!(messages[3].level, FlashLevel::Info);
    }

    #[test]
    fn parse_messages_skips_blank_entries() {
        let messages = parse_messages(r#"[{"level": "info", "text": "   "}]"#).unwrap();
        assert!(messages.is_empty());
        assert!(parse_messages("  ").unwrap().is_empty());
    }

    #[test]
    fn parse_messages_rejects_malformed_json() {
        let err = parse_messages("{not json").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn warning_renders_as_error() {
        assert_eq!(FlashLevel::from_tag("WARNING"), FlashLevel::Error);
    }
}
