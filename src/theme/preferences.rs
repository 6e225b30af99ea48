use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Theme;
use crate::error::DoniaiError;

/// Key the theme preference is stored under
pub const THEME_KEY: &str = "theme";

const PREFERENCES_DIR: &str = "doniai";
const PREFERENCES_FILE: &str = "preferences.toml";

/// TOML file holding user preferences across sessions
///
/// Unknown keys written by other versions are preserved on save.
/// No file locking - last writer wins if multiple instances run simultaneously.
#[derive(Debug, Clone)]
pub struct PreferenceFile {
    path: Option<PathBuf>,
}

impl PreferenceFile {
    /// `<data_dir>/doniai/preferences.toml`, or memory-only when there is no data dir
    pub fn default_location() -> Self {
        Self {
            path: dirs::data_dir().map(|p| p.join(PREFERENCES_DIR).join(PREFERENCES_FILE)),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Never touches the disk
    pub fn in_memory() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stored theme, `None` when nothing has been stored yet
    pub fn load_theme(&self) -> Result<Option<Theme>, DoniaiError> {
        let Some(table) = self.read_table()? else {
            return Ok(None);
        };

        match table.get(THEME_KEY) {
            None => Ok(None),
            Some(toml::Value::String(id)) => Theme::from_id(id)
                .map(Some)
                .ok_or_else(|| DoniaiError::Preferences(format!("unknown theme '{}'", id))),
            Some(other) => Err(DoniaiError::Preferences(format!(
                "'{}' must be a string, found {}",
                THEME_KEY,
                other.type_str()
            ))),
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), DoniaiError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut table = match self.read_table() {
            Ok(table) => table.unwrap_or_default(),
            Err(e) => {
                log::warn!(
                    "Replacing unreadable preferences {:?}, other keys lost: {}",
                    path,
                    e
                );
                toml::Table::new()
            }
        };
        table.insert(THEME_KEY.to_string(), toml::Value::String(theme.id().to_string()));

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents =
            toml::to_string(&table).map_err(|e| DoniaiError::Preferences(e.to_string()))?;
        fs::write(path, contents)?;

        log::debug!("Saved theme preference {} to {:?}", theme.id(), path);
        Ok(())
    }

    fn read_table(&self) -> Result<Option<toml::Table>, DoniaiError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        contents
            .parse::<toml::Table>()
            .map(Some)
            .map_err(|e| DoniaiError::Preferences(e.to_string()))
    }
}
