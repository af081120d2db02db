//! Content-item typing and boundary validation.
//!
//! The original data model stored a loosely-typed `payload` document and
//! branched on the item `type` column wherever it was read. Here the
//! payload is an explicit sum type whose variant must agree with the
//! declared item type, checked once at the authoring boundary; the rest
//! of the system never inspects raw JSON.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum allowed length for a track name.
pub const MAX_TRACK_NAME_LENGTH: usize = 150;

/// Maximum allowed length for a content-item title.
pub const MAX_ITEM_TITLE_LENGTH: usize = 200;

/// Maximum allowed length for a question prompt.
pub const MAX_QUESTION_PROMPT_LENGTH: usize = 500;

/// Maximum allowed length for an option label.
pub const MAX_OPTION_LABEL_LENGTH: usize = 200;

/// Maximum allowed length for a free-text answer.
pub const MAX_ANSWER_TEXT_LENGTH: usize = 2000;

// ---------------------------------------------------------------------------
// Item type and status
// ---------------------------------------------------------------------------

/// The media kind of a content item. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Video,
    Text,
    Audio,
    Image,
    File,
}

impl ItemType {
    /// The database/wire representation of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Video => "video",
            ItemType::Text => "text",
            ItemType::Audio => "audio",
            ItemType::Image => "image",
            ItemType::File => "file",
        }
    }

    /// Parse the database/wire representation.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "video" => Ok(ItemType::Video),
            "text" => Ok(ItemType::Text),
            "audio" => Ok(ItemType::Audio),
            "image" => Ok(ItemType::Image),
            "file" => Ok(ItemType::File),
            other => Err(CoreError::Validation(format!(
                "Unknown content item type: {other}"
            ))),
        }
    }
}

/// Publication status of a content item. Only `published` items are
/// visible to non-administrator traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Draft,
    Published,
}

impl ItemStatus {
    /// The database/wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Draft => "draft",
            ItemStatus::Published => "published",
        }
    }

    /// Parse the database/wire representation.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "draft" => Ok(ItemStatus::Draft),
            "published" => Ok(ItemStatus::Published),
            other => Err(CoreError::Validation(format!(
                "Unknown content item status: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Type-dependent payload of a content item.
///
/// Media variants carry a reference URL and an optional label; text
/// items carry the inline body. Serialized as a `kind`-tagged JSON
/// object into the `payload` jsonb column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Payload {
    Video { url: String, label: Option<String> },
    Text { body: String },
    Audio { url: String, label: Option<String> },
    Image { url: String, label: Option<String> },
    File { url: String, label: Option<String> },
}

impl Payload {
    /// The item type this payload variant belongs to.
    pub fn item_type(&self) -> ItemType {
        match self {
            Payload::Video { .. } => ItemType::Video,
            Payload::Text { .. } => ItemType::Text,
            Payload::Audio { .. } => ItemType::Audio,
            Payload::Image { .. } => ItemType::Image,
            Payload::File { .. } => ItemType::File,
        }
    }
}

/// Validate a payload against the declared item type.
///
/// The variant must match the type, URLs must be non-empty for media
/// variants, and text bodies must be non-empty.
pub fn validate_payload(item_type: ItemType, payload: &Payload) -> Result<(), CoreError> {
    if payload.item_type() != item_type {
        return Err(CoreError::Validation(format!(
            "Payload variant '{}' does not match item type '{}'",
            payload.item_type().as_str(),
            item_type.as_str()
        )));
    }
    match payload {
        Payload::Text { body } => {
            if body.trim().is_empty() {
                return Err(CoreError::Validation(
                    "Text payload body must not be empty".to_string(),
                ));
            }
        }
        Payload::Video { url, .. }
        | Payload::Audio { url, .. }
        | Payload::Image { url, .. }
        | Payload::File { url, .. } => {
            if url.trim().is_empty() {
                return Err(CoreError::Validation(
                    "Media payload url must not be empty".to_string(),
                ));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Name / text validation
// ---------------------------------------------------------------------------

/// Validate a non-empty, length-bounded text field.
fn validate_text(field: &'static str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{field} must not be empty"
        )));
    }
    if value.len() > max {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {max} characters, got {}",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a track name: non-empty and within [`MAX_TRACK_NAME_LENGTH`].
pub fn validate_track_name(name: &str) -> Result<(), CoreError> {
    validate_text("Track name", name, MAX_TRACK_NAME_LENGTH)
}

/// Validate a content-item title: non-empty and within [`MAX_ITEM_TITLE_LENGTH`].
pub fn validate_item_title(title: &str) -> Result<(), CoreError> {
    validate_text("Content item title", title, MAX_ITEM_TITLE_LENGTH)
}

/// Validate a question prompt: non-empty and within [`MAX_QUESTION_PROMPT_LENGTH`].
pub fn validate_question_prompt(prompt: &str) -> Result<(), CoreError> {
    validate_text("Question prompt", prompt, MAX_QUESTION_PROMPT_LENGTH)
}

/// Validate an option label: non-empty and within [`MAX_OPTION_LABEL_LENGTH`].
pub fn validate_option_label(label: &str) -> Result<(), CoreError> {
    validate_text("Option label", label, MAX_OPTION_LABEL_LENGTH)
}

/// Validate a free-text answer: length-bounded. Emptiness is checked by
/// the required-question rule, not here.
pub fn validate_answer_text(text: &str) -> Result<(), CoreError> {
    if text.len() > MAX_ANSWER_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Answer text must not exceed {MAX_ANSWER_TEXT_LENGTH} characters, got {}",
            text.len()
        )));
    }
    Ok(())
}

/// Check whether a submission satisfies a required question.
///
/// A required question needs either a chosen option or non-blank answer
/// text; optional questions accept anything, including nothing.
pub fn validate_required_answer(
    required: bool,
    option_id: Option<i64>,
    answer_text: Option<&str>,
) -> Result<(), CoreError> {
    if !required {
        return Ok(());
    }
    let has_text = answer_text.map(|t| !t.trim().is_empty()).unwrap_or(false);
    if option_id.is_none() && !has_text {
        return Err(CoreError::Validation(
            "This question is required: choose an option or provide answer text".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    // -- item type / status ----------------------------------------------------

    #[test]
    fn item_type_round_trips_through_str() {
        for t in [
            ItemType::Video,
            ItemType::Text,
            ItemType::Audio,
            ItemType::Image,
            ItemType::File,
        ] {
            assert_eq!(ItemType::parse(t.as_str()).unwrap(), t);
        }
    }

    #[test]
    fn item_type_rejects_unknown() {
        assert_matches!(ItemType::parse("podcast"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn item_status_round_trips_through_str() {
        assert_eq!(ItemStatus::parse("draft").unwrap(), ItemStatus::Draft);
        assert_eq!(
            ItemStatus::parse("published").unwrap(),
            ItemStatus::Published
        );
        assert!(ItemStatus::parse("archived").is_err());
    }

    // -- payload ---------------------------------------------------------------

    #[test]
    fn payload_serializes_with_kind_tag() {
        let payload = Payload::Video {
            url: "https://cdn.example/v.mp4".to_string(),
            label: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["kind"], "video");
        assert_eq!(value["url"], "https://cdn.example/v.mp4");
    }

    #[test]
    fn payload_deserializes_text_variant() {
        let payload: Payload =
            serde_json::from_value(json!({"kind": "text", "body": "hello"})).unwrap();
        assert_eq!(
            payload,
            Payload::Text {
                body: "hello".to_string()
            }
        );
    }

    #[test]
    fn validate_payload_accepts_matching_variant() {
        let payload = Payload::Text {
            body: "breathing exercise".to_string(),
        };
        assert!(validate_payload(ItemType::Text, &payload).is_ok());
    }

    #[test]
    fn validate_payload_rejects_mismatched_variant() {
        let payload = Payload::Text {
            body: "hello".to_string(),
        };
        assert_matches!(
            validate_payload(ItemType::Video, &payload),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn validate_payload_rejects_empty_url() {
        let payload = Payload::Image {
            url: "  ".to_string(),
            label: Some("cover".to_string()),
        };
        assert!(validate_payload(ItemType::Image, &payload).is_err());
    }

    #[test]
    fn validate_payload_rejects_empty_body() {
        let payload = Payload::Text {
            body: String::new(),
        };
        assert!(validate_payload(ItemType::Text, &payload).is_err());
    }

    // -- text validation ---------------------------------------------------------

    #[test]
    fn track_name_valid() {
        assert!(validate_track_name("Ansiedade no dia a dia").is_ok());
    }

    #[test]
    fn track_name_rejects_empty() {
        assert!(validate_track_name("").is_err());
        assert!(validate_track_name("   ").is_err());
    }

    #[test]
    fn track_name_rejects_over_max() {
        let name = "a".repeat(MAX_TRACK_NAME_LENGTH + 1);
        assert!(validate_track_name(&name).is_err());
    }

    #[test]
    fn answer_text_accepts_at_max() {
        let text = "a".repeat(MAX_ANSWER_TEXT_LENGTH);
        assert!(validate_answer_text(&text).is_ok());
    }

    #[test]
    fn answer_text_rejects_over_max() {
        let text = "a".repeat(MAX_ANSWER_TEXT_LENGTH + 1);
        assert!(validate_answer_text(&text).is_err());
    }

    // -- required answers --------------------------------------------------------

    #[test]
    fn required_question_accepts_option() {
        assert!(validate_required_answer(true, Some(7), None).is_ok());
    }

    #[test]
    fn required_question_accepts_text() {
        assert!(validate_required_answer(true, None, Some("free text")).is_ok());
    }

    #[test]
    fn required_question_rejects_neither() {
        assert_matches!(
            validate_required_answer(true, None, None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn required_question_rejects_blank_text() {
        assert!(validate_required_answer(true, None, Some("   ")).is_err());
    }

    #[test]
    fn optional_question_accepts_nothing() {
        assert!(validate_required_answer(false, None, None).is_ok());
    }
}
