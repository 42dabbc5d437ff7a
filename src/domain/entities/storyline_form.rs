//! Storyline form - prompt, optional lore, tone and target length

use crate::domain::value_objects::{StoryLength, StoryTone};

/// Field values for one storyline generation request
#[derive(Debug, Clone, PartialEq)]
pub struct StorylineForm {
    prompt: String,
    existing_lore: String,
    tone: Option<StoryTone>,
    length: StoryLength,
}

impl StorylineForm {
    pub fn new() -> Self {
        Self {
            prompt: String::new(),
            existing_lore: String::new(),
            tone: Some(StoryTone::default()),
            length: StoryLength::default(),
        }
    }

    #[cfg(test)]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[cfg(test)]
    pub fn with_existing_lore(mut self, lore: impl Into<String>) -> Self {
        self.existing_lore = lore.into();
        self
    }

    #[cfg(test)]
    pub fn with_tone(mut self, tone: StoryTone) -> Self {
        self.tone = Some(tone);
        self
    }

    #[cfg(test)]
    pub fn with_length(mut self, words: u32) -> Self {
        self.length = StoryLength::new(words);
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn existing_lore(&self) -> &str {
        &self.existing_lore
    }

    pub fn tone(&self) -> Option<StoryTone> {
        self.tone
    }

    pub fn length(&self) -> StoryLength {
        self.length
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_existing_lore(&mut self, lore: impl Into<String>) {
        self.existing_lore = lore.into();
    }

    /// `None` clears the select back to unset
    pub fn set_tone(&mut self, tone: Option<StoryTone>) {
        self.tone = tone;
    }

    pub fn set_length(&mut self, words: u32) {
        self.length = StoryLength::new(words);
    }

    /// Restore every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether the field with this wire name holds a value
    pub fn is_filled(&self, field: &str) -> bool {
        match field {
            "storyPrompt" => !self.prompt.trim().is_empty(),
            "existingLore" => !self.existing_lore.trim().is_empty(),
            "tone" => self.tone.is_some(),
            "storyLength" => true,
            _ => false,
        }
    }
}

impl Default for StorylineForm {
    fn default() -> Self {
        Self::new()
    }
}
