use tokio::sync::RwLock;
use tracing::info;

use crate::domain::value_objects::Theme;

/// Process-wide light/dark theme
///
/// Initialized once from the stored preference, falling back to the system
/// default. `toggle` is the only way to change it.
pub struct ThemeService {
    current: RwLock<Theme>,
}

impl ThemeService {
    pub fn new(preference: Option<Theme>) -> Self {
        Self {
            current: RwLock::new(preference.unwrap_or_default()),
        }
    }

    pub async fn current(&self) -> Theme {
        *self.current.read().await
    }

    /// Flip the theme and return the new value
    pub async fn toggle(&self) -> Theme {
        let mut current = self.current.write().await;
        let theme = current.toggled();
        *current = theme;
        info!(%theme, "Theme toggled");
        theme
    }
}
