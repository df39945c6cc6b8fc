use std::sync::{Arc, RwLock};

use tracing::info;

use reactfact_db::{KeyValueStore, keys, load_json, save_json};
use reactfact_types::Theme;

use crate::error::Result;

pub const APP_NAME: &str = "ReactFact";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Device preferences. Only the theme is stored today.
pub struct SettingsStore {
    storage: Arc<dyn KeyValueStore>,
    theme: RwLock<Theme>,
}

impl SettingsStore {
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let theme: Theme = load_json(storage.as_ref(), keys::THEME)?.unwrap_or_default();
        Ok(Self {
            storage,
            theme: RwLock::new(theme),
        })
    }

    pub fn theme(&self) -> Result<Theme> {
        Ok(*self.theme.read()?)
    }

    pub fn toggle_theme(&self) -> Result<Theme> {
        let mut theme = self.theme.write()?;
        let next = theme.toggled();
        save_json(self.storage.as_ref(), keys::THEME, &next)?;
        info!("Theme switched to {:?}", next);
        *theme = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactfact_db::MemoryStore;

    #[test]
    fn defaults_to_light() {
        let settings = SettingsStore::restore(Arc::new(MemoryStore::new())).unwrap();
        assert_eq!(settings.theme().unwrap(), Theme::Light);
    }

    #[test]
    fn toggled_theme_is_remembered() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let settings = SettingsStore::restore(storage.clone()).unwrap();
        assert_eq!(settings.toggle_theme().unwrap(), Theme::Dark);

        let reloaded = SettingsStore::restore(storage.clone()).unwrap();
        assert_eq!(reloaded.theme().unwrap(), Theme::Dark);
        assert_eq!(storage.get(keys::THEME).unwrap().as_deref(), Some("\"dark\""));

        assert_eq!(reloaded.toggle_theme().unwrap(), Theme::Light);
    }
}
