//! Shared application state

use std::sync::Arc;

use crate::application::ports::outbound::{FileSavePort, GenerationPort};
use crate::application::services::{FormSession, GenerationDispatcher, ThemeService};
use crate::domain::entities::{CharacterForm, LoreForm, StorylineForm};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::file_saver::LocalFileSaver;
use crate::infrastructure::generation_client::GenerationClient;

/// Shared application state
///
/// Each tool gets exactly one form session; nothing is shared between them.
pub struct AppState {
    pub config: AppConfig,
    pub theme_service: ThemeService,
    pub file_saver: Arc<dyn FileSavePort>,
    pub storyline: Arc<FormSession<StorylineForm>>,
    pub character: Arc<FormSession<CharacterForm>>,
    pub lore: Arc<FormSession<LoreForm>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let generation_client = Arc::new(GenerationClient::new(&config.service_base_url));
        let file_saver = Arc::new(LocalFileSaver::new(config.export_dir.clone()));
        Self::with_ports(config, generation_client, file_saver)
    }

    /// Wire the state around explicit adapters
    pub fn with_ports(
        config: AppConfig,
        generation: Arc<dyn GenerationPort>,
        file_saver: Arc<dyn FileSavePort>,
    ) -> Self {
        let dispatcher = Arc::new(GenerationDispatcher::new(generation));

        Self {
            theme_service: ThemeService::new(config.theme_preference),
            file_saver,
            storyline: Arc::new(FormSession::new(dispatcher.clone())),
            character: Arc::new(FormSession::new(dispatcher.clone())),
            lore: Arc::new(FormSession::new(dispatcher)),
            config,
        }
    }
}
