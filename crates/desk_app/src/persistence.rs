use std::fs;
use std::path::PathBuf;

use desk_core::Theme;
use desk_engine::AtomicFileWriter;
use engine_logging::{engine_error, engine_info, engine_warn};
use serde::{Deserialize, Serialize};

const THEME_FILENAME: &str = "theme.ron";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum StoredTheme {
    Light,
    Dark,
    Day,
}

impl From<Theme> for StoredTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => StoredTheme::Light,
            Theme::Dark => StoredTheme::Dark,
            Theme::Day => StoredTheme::Day,
        }
    }
}

impl From<StoredTheme> for Theme {
    fn from(theme: StoredTheme) -> Self {
        match theme {
            StoredTheme::Light => Theme::Light,
            StoredTheme::Dark => Theme::Dark,
            StoredTheme::Day => Theme::Day,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPreferences {
    theme: StoredTheme,
}

/// Single-entry preference store holding the selected theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeStore {
    dir: PathBuf,
}

impl ThemeStore {
    pub(crate) fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// `<config dir>/market_desk`, or the working directory when no config dir exists.
    pub(crate) fn default_location() -> Self {
        let dir = dirs::config_dir()
            .map(|dir| dir.join("market_desk"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub(crate) fn path(&self) -> PathBuf {
        self.dir.join(THEME_FILENAME)
    }

    pub(crate) fn load(&self) -> Option<Theme> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                engine_warn!("Failed to read theme preference from {:?}: {}", path, err);
                return None;
            }
        };

        match ron::from_str::<PersistedPreferences>(&content) {
            Ok(prefs) => {
                engine_info!("Loaded theme preference from {:?}", path);
                Some(prefs.theme.into())
            }
            Err(err) => {
                engine_warn!("Failed to parse theme preference from {:?}: {}", path, err);
                None
            }
        }
    }

    /// Stored theme, or the time-of-day default when nothing usable is stored.
    pub(crate) fn load_or_initial(&self, hour: u32) -> Theme {
        self.load().unwrap_or_else(|| Theme::initial_for_hour(hour))
    }

    pub(crate) fn save(&self, theme: Theme) {
        let prefs = PersistedPreferences {
            theme: theme.into(),
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&prefs, pretty) {
            Ok(text) => text,
            Err(err) => {
                engine_error!("Failed to serialize theme preference: {}", err);
                return;
            }
        };

        let writer = AtomicFileWriter::new(self.dir.clone());
        if let Err(err) = writer.write(THEME_FILENAME, &content) {
            engine_error!("Failed to write theme preference to {:?}: {}", self.dir, err);
        }
    }
}
