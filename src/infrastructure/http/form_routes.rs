//! Generation form API routes
//!
//! The presentation layer drives each form through these: field updates,
//! toggles, submit and reset. Submit blocks until the dispatch resolves.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{
    CharacterRequestDto, CharacterUpdateDto, CustomTraitsRequestDto, FormSnapshotDto,
    GenerationResultDto, LoreRequestDto, LoreUpdateDto, OptionsDto, SavedFileDto,
    StorylineRequestDto, StorylineUpdateDto, ToggleRequestDto, ToggleResponseDto,
};
use crate::application::services::{presenter, ExportError, FormError, FormSession, GenerationForm};
use crate::domain::entities::{CharacterForm, LoreForm, StorylineForm};
use crate::domain::value_objects::LoreTheme;
use crate::infrastructure::state::AppState;

/// A form with a session in [`AppState`]
pub trait HostedForm: GenerationForm {
    fn session(state: &AppState) -> &Arc<FormSession<Self>>;
}

impl HostedForm for StorylineForm {
    fn session(state: &AppState) -> &Arc<FormSession<Self>> {
        &state.storyline
    }
}

impl HostedForm for CharacterForm {
    fn session(state: &AppState) -> &Arc<FormSession<Self>> {
        &state.character
    }
}

impl HostedForm for LoreForm {
    fn session(state: &AppState) -> &Arc<FormSession<Self>> {
        &state.lore
    }
}

fn form_error_response(e: FormError) -> (StatusCode, String) {
    match e {
        FormError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.notice.to_string()),
        FormError::Busy => (StatusCode::CONFLICT, FormError::Busy.to_string()),
    }
}

async fn snapshot_of<F: HostedForm>(state: &AppState) -> Json<FormSnapshotDto<F::Body>> {
    Json(FormSnapshotDto::from_snapshot(F::session(state).snapshot().await))
}

/// List every option a form offers
pub async fn get_options() -> Json<OptionsDto> {
    Json(OptionsDto::current())
}

/// Get the current state of a form
pub async fn get_form<F: HostedForm>(
    State(state): State<Arc<AppState>>,
) -> Json<FormSnapshotDto<F::Body>> {
    snapshot_of::<F>(&state).await
}

/// Validate and dispatch a form
pub async fn submit_form<F: HostedForm>(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GenerationResultDto>, (StatusCode, String)> {
    let result = F::session(&state)
        .submit()
        .await
        .map_err(form_error_response)?;
    Ok(Json(result.into()))
}

/// Reset a form and its result to initial defaults
pub async fn reset_form<F: HostedForm>(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FormSnapshotDto<F::Body>>, (StatusCode, String)> {
    F::session(&state)
        .reset()
        .await
        .map_err(form_error_response)?;
    Ok(snapshot_of::<F>(&state).await)
}

/// Update storyline fields
pub async fn update_storyline(
    State(state): State<Arc<AppState>>,
    Json(update): Json<StorylineUpdateDto>,
) -> Result<Json<FormSnapshotDto<StorylineRequestDto>>, (StatusCode, String)> {
    state
        .storyline
        .update(|form| update.apply(form))
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok(snapshot_of::<StorylineForm>(&state).await)
}

/// Update character fields
pub async fn update_character(
    State(state): State<Arc<AppState>>,
    Json(update): Json<CharacterUpdateDto>,
) -> Result<Json<FormSnapshotDto<CharacterRequestDto>>, (StatusCode, String)> {
    state
        .character
        .update(|form| update.apply(form))
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok(snapshot_of::<CharacterForm>(&state).await)
}

/// Update lore fields
pub async fn update_lore(
    State(state): State<Arc<AppState>>,
    Json(update): Json<LoreUpdateDto>,
) -> Result<Json<FormSnapshotDto<LoreRequestDto>>, (StatusCode, String)> {
    state
        .lore
        .update(|form| update.apply(form))
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok(snapshot_of::<LoreForm>(&state).await)
}

/// Check or uncheck a character trait
pub async fn toggle_trait(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleRequestDto>,
) -> Result<Json<ToggleResponseDto>, (StatusCode, String)> {
    let item = req.item.trim().to_string();
    if item.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Trait must not be empty".to_string()));
    }

    let selected = state
        .character
        .update(|form| form.toggle_trait(item.clone()))
        .await;
    Ok(Json(ToggleResponseDto { item, selected }))
}

/// Merge custom traits entered in the traits dialog
pub async fn merge_custom_traits(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CustomTraitsRequestDto>,
) -> Json<FormSnapshotDto<CharacterRequestDto>> {
    let added = state
        .character
        .update(|form| form.merge_custom_traits(&req.input))
        .await;
    tracing::debug!(added, "Merged custom traits");
    snapshot_of::<CharacterForm>(&state).await
}

/// Check or uncheck a lore theme
pub async fn toggle_lore_theme(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleRequestDto>,
) -> Result<Json<ToggleResponseDto>, (StatusCode, String)> {
    let theme: LoreTheme = req
        .item
        .parse()
        .map_err(|e: anyhow::Error| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let selected = state.lore.update(|form| form.toggle_theme(theme)).await;
    Ok(Json(ToggleResponseDto {
        item: theme.to_string(),
        selected,
    }))
}

/// Download the generated story as a text file
pub async fn export_story(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let snapshot = state.storyline.snapshot().await;
    let file = presenter::export(&snapshot.result).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            ExportError::NothingToExport.to_string(),
        )
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, file.mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.contents,
    ))
}

/// Save the generated story through the local file-save capability
pub async fn save_story(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SavedFileDto>, (StatusCode, String)> {
    let snapshot = state.storyline.snapshot().await;
    let path = presenter::save(state.file_saver.as_ref(), &snapshot.result)
        .await
        .map_err(|e| match e {
            ExportError::NothingToExport => (StatusCode::NOT_FOUND, e.to_string()),
            ExportError::Save(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    Ok(Json(SavedFileDto {
        path: path.display().to_string(),
    }))
}
