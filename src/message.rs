//! The per-call log record and its renderers.
//!
//! A `Message` is built fresh for every emitted call, rendered once through
//! the active handler, and discarded. Args live in a `BTreeMap` so both
//! renderers emit keys in ascending byte order.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::color::{level_color, paint};
use crate::handler::Handler;
use crate::level::Level;
use crate::value::Value;

/// A single log record prior to rendering.
#[derive(Debug, Clone)]
pub struct Message {
    /// Capture-time instant.
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub msg: String,
    /// Key/value arguments; `None` when the call supplied no pairs.
    /// Absent and empty render identically.
    pub args: Option<BTreeMap<String, Value>>,
}

impl Message {
    pub fn new(
        timestamp: DateTime<Utc>,
        level: Level,
        msg: impl Into<String>,
        args: Option<BTreeMap<String, Value>>,
    ) -> Self {
        Self {
            timestamp,
            level,
            msg: msg.into(),
            args,
        }
    }

    /// Render one line in the given format. `colors` applies to the text
    /// handler's level token only.
    pub fn render(&self, handler: Handler, colors: bool) -> String {
        match handler {
            Handler::Text => self.render_text(colors),
            Handler::Json => self.render_json(),
        }
    }

    fn render_text(&self, colors: bool) -> String {
        let ts = format_timestamp(&self.timestamp);
        let level = format_level(self.level, colors);

        let mut out = format!(r#"timestamp={ts} level={level} msg="{}""#, self.msg);

        let args = format_args(self.args.as_ref());
        if !args.is_empty() {
            out.push(' ');
            out.push_str(&args);
        }

        out
    }

    /// Builds the object by hand so a user arg named `timestamp`, `level` or
    /// `msg` shows up as an additional (duplicate-keyed) member instead of
    /// silently replacing the reserved one.
    fn render_json(&self) -> String {
        let mut out = String::from("{");

        out.push_str("\"timestamp\":");
        out.push_str(&json_string(&format_timestamp(&self.timestamp)));
        out.push(',');

        out.push_str("\"level\":");
        out.push_str(&json_string(self.level.as_str()));
        out.push(',');

        out.push_str("\"msg\":");
        out.push_str(&json_string(&self.msg));

        if let Some(args) = &self.args {
            for (key, value) in args {
                out.push(',');
                out.push_str(&json_string(key));
                out.push(':');
                out.push_str(&value.to_json().to_string());
            }
        }

        out.push('}');
        out
    }
}

/// A string as a JSON token, escaped and double-quoted.
fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

/// RFC3339 with seconds precision, `Z` suffix for UTC.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Uppercased 3-letter level token, color-wrapped when enabled.
fn format_level(level: Level, colors: bool) -> String {
    let token = level.as_str().to_uppercase();
    paint(&token, level_color(level), colors).into_owned()
}

/// Sorted `key=value` pairs joined by single spaces; text values quoted,
/// everything else in its bare form. Empty for absent or empty args.
fn format_args(args: Option<&BTreeMap<String, Value>>) -> String {
    let Some(args) = args else {
        return String::new();
    };

    let mut parts = Vec::with_capacity(args.len());
    for (key, value) in args {
        if value.is_text() {
            parts.push(format!(r#"{key}="{value}""#));
        } else {
            parts.push(format!("{key}={value}"));
        }
    }

    parts.join(" ")
}
