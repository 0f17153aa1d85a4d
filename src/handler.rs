//! Output format selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Output serialization format. Rendering itself lives in [`crate::Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handler {
    /// Human-readable `key=value` lines.
    #[default]
    Text,
    /// One compact JSON object per line.
    Json,
}

impl Handler {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric selection, for callers configuring the handler from raw codes.
/// 0 selects text, 1 selects json; anything else is an error the caller
/// typically clamps to the default.
impl TryFrom<i32> for Handler {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        match code {
            0 => Ok(Self::Text),
            1 => Ok(Self::Json),
            other => Err(Error::UnknownHandler(other)),
        }
    }
}
