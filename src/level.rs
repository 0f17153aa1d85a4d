//! Log severity levels.
//!
//! Levels form a total order used for threshold filtering:
//! `Invalid < Debug < Info < Warn < Error < Fatal`. `Invalid` is a sentinel
//! only; setters treat it as "fall back to the default".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered severity classification controlling whether a log call emits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Level {
    /// Sentinel for unparseable or out-of-range values; never a valid threshold.
    #[serde(skip)]
    Invalid = -1,
    /// Most verbose; diagnostic detail.
    Debug = 0,
    /// Default level; normal operation.
    #[default]
    Info = 1,
    /// Something unexpected but recoverable.
    Warn = 2,
    /// An operation failed.
    Error = 3,
    /// Unrecoverable; logging at this level terminates the process.
    Fatal = 4,
}

impl Level {
    /// Parse a lowercase level name. Exact match only.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(Error::InvalidLevel),
        }
    }

    /// Parse a level name, panicking on failure.
    ///
    /// Intended for startup configuration paths where a bad level name
    /// should abort rather than be silently defaulted.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid level name.
    pub fn must_parse(name: &str) -> Self {
        match Self::parse(name) {
            Ok(level) => level,
            Err(err) => panic!("{err}: {name:?}"),
        }
    }

    /// Map a raw integer to a level; anything out of range is `Invalid`.
    pub fn from_repr(repr: i8) -> Self {
        match repr {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            3 => Self::Error,
            4 => Self::Fatal,
            _ => Self::Invalid,
        }
    }

    /// Three-letter code used in rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "dbg",
            Self::Info => "inf",
            Self::Warn => "wrn",
            Self::Error => "err",
            Self::Fatal => "ftl",
            Self::Invalid => "invalid",
        }
    }

    /// The filtering predicate: does a call at `self` pass `threshold`?
    ///
    /// Pure numeric comparison under the declared ordering.
    pub fn at_least(self, threshold: Self) -> bool {
        (self as i8) >= (threshold as i8)
    }

    /// Whether this is one of the five usable levels.
    pub fn is_valid(self) -> bool {
        self != Self::Invalid
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
