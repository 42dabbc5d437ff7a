//! Value objects - Immutable objects defined by their attributes

mod options;
mod selection;
mod story_length;
mod theme;

pub use options::{ContentType, Era, LoreTheme, LoreTone, Race, Role, StoryTone, PRESET_TRAITS};
pub use selection::Selection;
pub use story_length::StoryLength;
pub use theme::Theme;
