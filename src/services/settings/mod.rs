// Settings service
// Loads display tuning tables from a TOML file, falling back to defaults

use std::path::Path;

use thiserror::Error;

use crate::models::settings::{DisplaySettings, SettingsValidationError};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(#[from] SettingsValidationError),
}

/// Load and validate display settings from `path`.
///
/// A missing file is not an error: the compiled defaults apply. Keys the
/// file omits also fall back to defaults, so a deployment can override
/// just one table.
pub fn load(path: &Path) -> Result<DisplaySettings, SettingsError> {
    if !path.exists() {
        log::info!(
            "No display settings at {}, using defaults",
            path.display()
        );
        return Ok(DisplaySettings::default());
    }

    let data = std::fs::read_to_string(path)?;
    let settings: DisplaySettings = toml::from_str(&data)?;
    settings.validate()?;
    log::info!("Loaded display settings from {}", path.display());
    Ok(settings)
}

/// Like [`load`], but degrades to defaults on any failure. For hosts
/// where a bad settings file must never block rendering.
pub fn load_or_default(path: &Path) -> DisplaySettings {
    match load(path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!(
                "Falling back to default display settings ({}): {}",
                path.display(),
                err
            );
            DisplaySettings::default()
        }
    }
}
