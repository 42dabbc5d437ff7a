//! Request bodies sent to the generation service
//!
//! Field order is the wire order. The lore endpoint takes snake_case keys
//! while the other two take camelCase; both are kept as the service expects.

use serde::Serialize;

use crate::domain::entities::{CharacterForm, LoreForm, StorylineForm};

/// Label of a select field, or "" when unset
fn label<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Body for `POST /generate_storyline`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorylineRequestDto {
    pub story_prompt: String,
    pub existing_lore: String,
    pub tone: String,
    pub story_length: u32,
}

impl From<&StorylineForm> for StorylineRequestDto {
    fn from(form: &StorylineForm) -> Self {
        Self {
            story_prompt: form.prompt().to_string(),
            existing_lore: form.existing_lore().to_string(),
            tone: label(form.tone()),
            story_length: form.length().words(),
        }
    }
}

/// Body for `POST /generate_backstory`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRequestDto {
    pub character_name: String,
    pub race: String,
    pub role: String,
    pub traits: Vec<String>,
    pub strengths_weaknesses: String,
}

impl From<&CharacterForm> for CharacterRequestDto {
    fn from(form: &CharacterForm) -> Self {
        Self {
            character_name: form.name().to_string(),
            race: label(form.race()),
            role: label(form.role()),
            traits: form.traits().iter().cloned().collect(),
            strengths_weaknesses: form.strengths_weaknesses().to_string(),
        }
    }
}

/// Body for `POST /generate_lore`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoreRequestDto {
    pub content_type: String,
    pub lore_name: String,
    pub era: String,
    pub themes: Vec<String>,
    pub tone: String,
}

impl From<&LoreForm> for LoreRequestDto {
    fn from(form: &LoreForm) -> Self {
        Self {
            content_type: label(form.content_type()),
            lore_name: form.lore_name().to_string(),
            era: label(form.era()),
            themes: form.themes().iter().map(|t| t.to_string()).collect(),
            tone: label(form.tone()),
        }
    }
}
