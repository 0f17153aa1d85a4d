//! Configuration surface.
//!
//! All fields default individually, so a partial document deserializes
//! cleanly. Sink selection stays programmatic; file loading and CLI parsing
//! belong to the embedding application.

use serde::{Deserialize, Serialize};

use crate::color::ColorMode;
use crate::handler::Handler;
use crate::level::Level;

/// Logger settings as carried in an application's config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum level; calls below it are suppressed.
    pub level: Level,

    /// Output format (text or json).
    pub format: Handler,

    /// ANSI color policy for text output.
    pub color: ColorMode,
}
