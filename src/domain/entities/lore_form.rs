//! Lore form - world-building content request

use crate::domain::value_objects::{ContentType, Era, LoreTheme, LoreTone, Selection};

/// Field values for one lore generation request
///
/// Content type, era and tone are required. The world name and themes are
/// optional; the generation service names the world itself when left blank.
#[derive(Debug, Clone, PartialEq)]
pub struct LoreForm {
    content_type: Option<ContentType>,
    lore_name: String,
    era: Option<Era>,
    themes: Selection<LoreTheme>,
    tone: Option<LoreTone>,
}

impl LoreForm {
    pub fn new() -> Self {
        Self {
            content_type: Some(ContentType::default()),
            lore_name: String::new(),
            era: Some(Era::default()),
            themes: Selection::new(),
            tone: Some(LoreTone::default()),
        }
    }

    #[cfg(test)]
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    #[cfg(test)]
    pub fn with_lore_name(mut self, name: impl Into<String>) -> Self {
        self.lore_name = name.into();
        self
    }

    #[cfg(test)]
    pub fn with_era(mut self, era: Era) -> Self {
        self.era = Some(era);
        self
    }

    #[cfg(test)]
    pub fn with_theme(mut self, theme: LoreTheme) -> Self {
        self.themes.insert(theme);
        self
    }

    #[cfg(test)]
    pub fn with_tone(mut self, tone: LoreTone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }

    pub fn lore_name(&self) -> &str {
        &self.lore_name
    }

    pub fn era(&self) -> Option<Era> {
        self.era
    }

    pub fn themes(&self) -> &Selection<LoreTheme> {
        &self.themes
    }

    pub fn tone(&self) -> Option<LoreTone> {
        self.tone
    }

    pub fn set_content_type(&mut self, content_type: Option<ContentType>) {
        self.content_type = content_type;
    }

    pub fn set_lore_name(&mut self, name: impl Into<String>) {
        self.lore_name = name.into();
    }

    pub fn set_era(&mut self, era: Option<Era>) {
        self.era = era;
    }

    pub fn set_tone(&mut self, tone: Option<LoreTone>) {
        self.tone = tone;
    }

    pub fn toggle_theme(&mut self, theme: LoreTheme) -> bool {
        self.themes.toggle(theme)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_filled(&self, field: &str) -> bool {
        match field {
            "content_type" => self.content_type.is_some(),
            "lore_name" => !self.lore_name.trim().is_empty(),
            "era" => self.era.is_some(),
            "themes" => !self.themes.is_empty(),
            "tone" => self.tone.is_some(),
            _ => false,
        }
    }
}

impl Default for LoreForm {
    fn default() -> Self {
        Self::new()
    }
}
