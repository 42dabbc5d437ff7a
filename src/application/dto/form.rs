//! DTOs exchanged with the presentation layer

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::{
    presenter, validation, FormSnapshot, GenerationForm, Tool, ToolSpec,
};
use crate::domain::entities::{CharacterForm, GenerationResult, LoreForm, StorylineForm};
use crate::domain::value_objects::{
    ContentType, Era, LoreTheme, LoreTone, Race, Role, StoryLength, StoryTone, Theme,
    PRESET_TRAITS,
};

/// An empty label clears the select back to unset
fn parse_select<T>(label: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = anyhow::Error>,
{
    if label.trim().is_empty() {
        Ok(None)
    } else {
        label.parse().map(Some)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResultDto {
    pub text: String,
    pub is_error: bool,
}

impl From<GenerationResult> for GenerationResultDto {
    fn from(result: GenerationResult) -> Self {
        Self {
            text: presenter::render(&result).to_string(),
            is_error: result.is_error,
        }
    }
}

/// Everything the presentation layer needs to draw one form
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshotDto<B> {
    pub tool: Tool,
    pub phase: &'static str,
    /// True while a dispatch is in flight; the submit control should be disabled
    pub submitting: bool,
    pub can_submit: bool,
    pub missing_fields: Vec<&'static str>,
    /// Current field values, keyed as on the wire
    pub form: B,
    pub result: GenerationResultDto,
    pub completed_at: Option<DateTime<Utc>>,
}

impl<B> FormSnapshotDto<B> {
    pub fn from_snapshot<F>(snapshot: FormSnapshot<F>) -> Self
    where
        F: GenerationForm<Body = B>,
    {
        Self {
            tool: F::SPEC.tool,
            phase: snapshot.phase.as_str(),
            submitting: !snapshot.phase.is_idle(),
            can_submit: validation::can_submit(&snapshot.form),
            missing_fields: snapshot.form.missing_fields(),
            form: snapshot.form.to_body(),
            result: snapshot.result.into(),
            completed_at: snapshot.completed_at,
        }
    }
}

/// Partial update of the storyline form; absent fields are left alone
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorylineUpdateDto {
    pub story_prompt: Option<String>,
    pub existing_lore: Option<String>,
    pub tone: Option<String>,
    pub story_length: Option<u32>,
}

impl StorylineUpdateDto {
    /// Labels are parsed before anything is written, so a bad label leaves
    /// the form untouched
    pub fn apply(self, form: &mut StorylineForm) -> anyhow::Result<()> {
        let tone = self.tone.as_deref().map(parse_select::<StoryTone>).transpose()?;

        if let Some(prompt) = self.story_prompt {
            form.set_prompt(prompt);
        }
        if let Some(lore) = self.existing_lore {
            form.set_existing_lore(lore);
        }
        if let Some(tone) = tone {
            form.set_tone(tone);
        }
        if let Some(words) = self.story_length {
            form.set_length(words);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterUpdateDto {
    pub character_name: Option<String>,
    pub race: Option<String>,
    pub role: Option<String>,
    pub strengths_weaknesses: Option<String>,
}

impl CharacterUpdateDto {
    pub fn apply(self, form: &mut CharacterForm) -> anyhow::Result<()> {
        let race = self.race.as_deref().map(parse_select::<Race>).transpose()?;
        let role = self.role.as_deref().map(parse_select::<Role>).transpose()?;

        if let Some(name) = self.character_name {
            form.set_name(name);
        }
        if let Some(race) = race {
            form.set_race(race);
        }
        if let Some(role) = role {
            form.set_role(role);
        }
        if let Some(text) = self.strengths_weaknesses {
            form.set_strengths_weaknesses(text);
        }
        Ok(())
    }
}

/// Lore updates use the same snake_case keys as the lore endpoint
#[derive(Debug, Default, Deserialize)]
pub struct LoreUpdateDto {
    pub content_type: Option<String>,
    pub lore_name: Option<String>,
    pub era: Option<String>,
    pub tone: Option<String>,
}

impl LoreUpdateDto {
    pub fn apply(self, form: &mut LoreForm) -> anyhow::Result<()> {
        let content_type = self
            .content_type
            .as_deref()
            .map(parse_select::<ContentType>)
            .transpose()?;
        let era = self.era.as_deref().map(parse_select::<Era>).transpose()?;
        let tone = self.tone.as_deref().map(parse_select::<LoreTone>).transpose()?;

        if let Some(content_type) = content_type {
            form.set_content_type(content_type);
        }
        if let Some(name) = self.lore_name {
            form.set_lore_name(name);
        }
        if let Some(era) = era {
            form.set_era(era);
        }
        if let Some(tone) = tone {
            form.set_tone(tone);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequestDto {
    pub item: String,
}

/// Free text from the traits dialog, comma separated
#[derive(Debug, Deserialize)]
pub struct CustomTraitsRequestDto {
    pub input: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponseDto {
    pub item: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFileDto {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDto {
    pub theme: Theme,
    pub is_dark: bool,
}

impl From<Theme> for ThemeDto {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            is_dark: theme.is_dark(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDto {
    pub tool: Tool,
    pub endpoint: &'static str,
    pub response_key: &'static str,
    pub required_fields: &'static [&'static str],
}

impl From<&ToolSpec> for ToolDto {
    fn from(spec: &ToolSpec) -> Self {
        Self {
            tool: spec.tool,
            endpoint: spec.endpoint,
            response_key: spec.response_key,
            required_fields: spec.required_fields,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryLengthRangeDto {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

/// Option lists for every select and checkbox group
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsDto {
    pub story_tones: Vec<&'static str>,
    pub story_length: StoryLengthRangeDto,
    pub races: Vec<&'static str>,
    pub roles: Vec<&'static str>,
    pub preset_traits: Vec<&'static str>,
    pub content_types: Vec<&'static str>,
    pub eras: Vec<&'static str>,
    pub lore_themes: Vec<&'static str>,
    pub lore_tones: Vec<&'static str>,
    pub tools: Vec<ToolDto>,
}

impl OptionsDto {
    pub fn current() -> Self {
        Self {
            story_tones: StoryTone::labels(),
            story_length: StoryLengthRangeDto {
                min: StoryLength::MIN,
                max: StoryLength::MAX,
                step: StoryLength::STEP,
                default: StoryLength::DEFAULT,
            },
            races: Race::labels(),
            roles: Role::labels(),
            preset_traits: PRESET_TRAITS.to_vec(),
            content_types: ContentType::labels(),
            eras: Era::labels(),
            lore_themes: LoreTheme::labels(),
            lore_tones: LoreTone::labels(),
            tools: vec![
                ToolDto::from(&StorylineForm::SPEC),
                ToolDto::from(&CharacterForm::SPEC),
                ToolDto::from(&LoreForm::SPEC),
            ],
        }
    }
}
