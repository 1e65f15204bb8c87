// src/config.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path};

pub const DEFAULT_NAME_LENGTH: usize = 8;
pub const DEFAULT_CONTENT_LENGTH: usize = 100;
pub const DEFAULT_EXTENSION: &str = "txt";
pub const DEFAULT_BACKUP_DIR: &str = "backup";

/// Tunables for generated files and the backup folder.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Length of the random base name, before the extension.
    pub name_length: usize,
    /// Number of random characters written into each file.
    pub content_length: usize,
    /// Extension without the leading dot.
    pub extension: String,
    /// Name of the backup subdirectory; a single path component.
    pub backup_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name_length: DEFAULT_NAME_LENGTH,
            content_length: DEFAULT_CONTENT_LENGTH,
            extension: String::from(DEFAULT_EXTENSION),
            backup_dir: String::from(DEFAULT_BACKUP_DIR),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, contains unknown keys,
    /// or fails [`Settings::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).context("Failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `path`, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid settings file: {}", path.display()))
    }

    /// # Errors
    ///
    /// Returns an error if the name length is zero, or if `extension` or
    /// `backup_dir` would escape the target directory.
    pub fn validate(&self) -> Result<()> {
        if self.name_length == 0 {
            bail!("name_length must be greater than zero");
        }
        if self.extension.contains(['/', '\\']) {
            bail!("extension must not contain path separators: {}", self.extension);
        }
        let mut components = Path::new(&self.backup_dir).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => bail!(
                "backup_dir must be a single directory name: {}",
                self.backup_dir
            ),
        }
    }

    /// File name suffix including the dot, or empty for no extension.
    #[must_use]
    pub fn suffix(&self) -> String {
        if self.extension.is_empty() {
            String::new()
        } else {
            format!(".{}", self.extension)
        }
    }
}
