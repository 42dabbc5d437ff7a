//! Generation form configuration
//!
//! The three tools share one form pattern (form -> validate -> dispatch ->
//! present). What differs between them is captured by a [`ToolSpec`] and the
//! [`GenerationForm`] impl that maps a form onto its wire body.

use serde::Serialize;

use crate::application::dto::{CharacterRequestDto, LoreRequestDto, StorylineRequestDto};
use crate::domain::entities::{CharacterForm, LoreForm, StorylineForm};

/// The generation tools this host offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Storyline,
    Character,
    Lore,
}

impl Tool {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Storyline => "storyline",
            Self::Character => "character",
            Self::Lore => "lore",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed per-tool configuration
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub tool: Tool,
    /// Endpoint path on the generation service
    pub endpoint: &'static str,
    /// Key holding the generated text in the response body
    pub response_key: &'static str,
    /// Wire names of the fields that must be filled before submitting
    pub required_fields: &'static [&'static str],
    /// Blocking notice shown when validation fails
    pub validation_notice: &'static str,
    /// Shown when the service answers without the response key
    pub missing_result_message: &'static str,
    /// Shown on network failure, non-success status or unparseable body
    pub transport_error_message: &'static str,
}

pub const STORYLINE_SPEC: ToolSpec = ToolSpec {
    tool: Tool::Storyline,
    endpoint: "/generate_storyline",
    response_key: "story",
    required_fields: &["storyPrompt", "tone"],
    validation_notice: "Please enter a story prompt!",
    missing_result_message: "Failed to generate story.",
    transport_error_message: "An error occurred. Please try again.",
};

pub const CHARACTER_SPEC: ToolSpec = ToolSpec {
    tool: Tool::Character,
    endpoint: "/generate_backstory",
    response_key: "backstory",
    required_fields: &["characterName", "race", "role", "traits", "strengthsWeaknesses"],
    validation_notice: "Please fill in all fields before generating the backstory.",
    missing_result_message: "Failed to generate backstory.",
    transport_error_message: "An error occurred. Please try again.",
};

pub const LORE_SPEC: ToolSpec = ToolSpec {
    tool: Tool::Lore,
    endpoint: "/generate_lore",
    response_key: "lore",
    required_fields: &["content_type", "era", "tone"],
    validation_notice: "Please choose a content type, era and tone.",
    missing_result_message: "Error generating lore. Please try again.",
    transport_error_message: "Failed to connect to the server.",
};

/// A form that can be validated and turned into a generation request
pub trait GenerationForm: Clone + Default + Send + Sync + 'static {
    /// Request body in the shape the tool's endpoint expects
    type Body: Serialize + Send + Sync;

    const SPEC: ToolSpec;

    /// Whether the field with this wire name holds a value
    fn is_filled(&self, field: &str) -> bool;

    /// Required fields, in declaration order, that are still empty
    fn missing_fields(&self) -> Vec<&'static str> {
        Self::SPEC
            .required_fields
            .iter()
            .copied()
            .filter(|field| !self.is_filled(field))
            .collect()
    }

    fn to_body(&self) -> Self::Body;

    fn reset(&mut self);
}

impl GenerationForm for StorylineForm {
    type Body = StorylineRequestDto;

    const SPEC: ToolSpec = STORYLINE_SPEC;

    fn is_filled(&self, field: &str) -> bool {
        StorylineForm::is_filled(self, field)
    }

    fn to_body(&self) -> Self::Body {
        StorylineRequestDto::from(self)
    }

    fn reset(&mut self) {
        StorylineForm::reset(self)
    }
}

impl GenerationForm for CharacterForm {
    type Body = CharacterRequestDto;

    const SPEC: ToolSpec = CHARACTER_SPEC;

    fn is_filled(&self, field: &str) -> bool {
        CharacterForm::is_filled(self, field)
    }

    fn to_body(&self) -> Self::Body {
        CharacterRequestDto::from(self)
    }

    fn reset(&mut self) {
        CharacterForm::reset(self)
    }
}

impl GenerationForm for LoreForm {
    type Body = LoreRequestDto;

    const SPEC: ToolSpec = LORE_SPEC;

    fn is_filled(&self, field: &str) -> bool {
        LoreForm::is_filled(self, field)
    }

    fn to_body(&self) -> Self::Body {
        LoreRequestDto::from(self)
    }

    fn reset(&mut self) {
        LoreForm::reset(self)
    }
}
