use std::io;

use thiserror::Error;

/// Library-wide error type for droidgen operations.
///
/// Only hard failures live here. Per-file events that the generator recovers
/// from (destination conflicts, missing shared resource files, missing
/// injection anchors) are surfaced as outcome values and console messages
/// instead, so a best-effort run always completes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An `app/` module already exists at the target location.
    #[error("an Android project already exists in this directory")]
    ProjectExists,

    /// Activity type argument is not one of the known variants.
    #[error("Invalid activity type '{0}': must be one of empty, blank, fullscreen, login")]
    InvalidActivityType(String),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Settings file could not be parsed.
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Settings could not be serialized.
    #[error("Settings write error: {0}")]
    SettingsWrite(#[from] toml::ser::Error),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting it.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidActivityType(_)
            | AppError::Template(_)
            | AppError::SettingsParse(_)
            | AppError::SettingsWrite(_) => io::ErrorKind::InvalidInput,
            AppError::ProjectExists => io::ErrorKind::AlreadyExists,
        }
    }
}
