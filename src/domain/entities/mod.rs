//! Domain entities - The generation forms and what they produce

mod character_form;
mod generation_result;
mod lore_form;
mod storyline_form;

pub use character_form::CharacterForm;
pub use generation_result::{FormPhase, GenerationResult};
pub use lore_form::LoreForm;
pub use storyline_form::StorylineForm;
