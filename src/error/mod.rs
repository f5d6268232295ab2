//! Error types for the relay bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. Most
//! variants use `#[from]` for automatic conversion at `?` sites.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal: the process logs the error and exits.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue indicating unexpected data, such as a malformed
    /// identifier in the environment.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Logged where it occurs; surfaced to the
    /// invoking user only when the failing operation was a slash command.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error, primarily from binding the liveness HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
