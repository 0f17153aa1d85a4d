//! The logger: configuration, filtering, and emission.
//!
//! One severity method call performs the whole pipeline inline: threshold
//! check, argument normalization, record construction, rendering, and a
//! single write to the sink. No locking; a `Logger` has one logical owner
//! (clone the configuration into a second instance for concurrent use).

use std::collections::BTreeMap;
use std::io::{self, Write};

use chrono::Utc;

use crate::color::ColorMode;
use crate::config::Config;
use crate::handler::Handler;
use crate::level::Level;
use crate::message::Message;
use crate::value::Value;

/// Synthetic key paired with the orphan element of an odd argument list.
pub const NO_KEY: &str = "no_key";

/// Write-only destination for rendered lines.
pub type Sink = Box<dyn Write + Send>;

/// Termination capability invoked by [`Logger::fatal`]. Injectable so tests
/// can observe the call without ending the test process.
pub type ExitFn = Box<dyn Fn(i32) + Send>;

/// A leveled key/value logger.
///
/// Defaults: stderr sink, `Info` threshold, text handler, automatic color
/// detection, `std::process::exit` termination.
pub struct Logger {
    out: Sink,
    level: Level,
    handler: Handler,
    colors: ColorMode,
    exit: ExitFn,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            out: Box::new(io::stderr()),
            level: Level::default(),
            handler: Handler::default(),
            colors: ColorMode::default(),
            exit: Box::new(|code| std::process::exit(code)),
        }
    }

    /// Build a logger from a configuration surface (stderr sink).
    pub fn from_config(config: &Config) -> Self {
        let mut logger = Self::new();
        logger.apply_config(config);
        logger
    }

    /// Apply level, format, and color settings. The sink is unaffected.
    pub fn apply_config(&mut self, config: &Config) {
        self.set_level(config.level);
        self.set_handler(config.format);
        self.set_colors(config.color);
    }

    /// Replace the sink. `None` resets to stderr. The prior sink is dropped,
    /// not closed.
    pub fn set_output(&mut self, out: Option<Sink>) {
        self.out = out.unwrap_or_else(|| Box::new(io::stderr()));
    }

    /// Set the minimum level. `Invalid` (which is also what out-of-range
    /// integers map to via [`Level::from_repr`]) resets to the default.
    pub fn set_level(&mut self, level: Level) {
        if !level.is_valid() {
            self.level = Level::default();
            return;
        }

        self.level = level;
    }

    /// Current threshold.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Set the output format. Raw numeric codes are clamped to the default
    /// at the `Handler::try_from` boundary before they reach this setter.
    pub fn set_handler(&mut self, handler: Handler) {
        self.handler = handler;
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }

    /// Set the ANSI color policy for text output.
    pub fn set_colors(&mut self, colors: ColorMode) {
        self.colors = colors;
    }

    /// Replace the termination capability used by [`Logger::fatal`].
    pub fn set_exit(&mut self, exit: ExitFn) {
        self.exit = exit;
    }

    /// Log at debug level. Returns the sink's byte count, or `Ok(0)` when
    /// suppressed by the threshold.
    pub fn debug(&mut self, msg: &str, args: &[Value]) -> io::Result<usize> {
        self.log(Level::Debug, msg, args)
    }

    /// Log at info level.
    pub fn info(&mut self, msg: &str, args: &[Value]) -> io::Result<usize> {
        self.log(Level::Info, msg, args)
    }

    /// Log at warn level.
    pub fn warn(&mut self, msg: &str, args: &[Value]) -> io::Result<usize> {
        self.log(Level::Warn, msg, args)
    }

    /// Log at error level.
    pub fn error(&mut self, msg: &str, args: &[Value]) -> io::Result<usize> {
        self.log(Level::Error, msg, args)
    }

    /// Write unconditionally (fatal ignores the threshold), then invoke the
    /// termination capability with a non-zero code.
    pub fn fatal(&mut self, msg: &str, args: &[Value]) {
        let _ = self.emit(Level::Fatal, msg, args);
        (self.exit)(1);
    }

    fn log(&mut self, level: Level, msg: &str, args: &[Value]) -> io::Result<usize> {
        // Short-circuit before any formatting or allocation.
        if !level.at_least(self.level) {
            return Ok(0);
        }

        self.emit(level, msg, args)
    }

    fn emit(&mut self, level: Level, msg: &str, args: &[Value]) -> io::Result<usize> {
        let message = Message::new(Utc::now(), level, msg, args_map(args));

        let mut line = message.render(self.handler, self.colors.enabled());
        line.push('\n');

        self.out.write(line.as_bytes())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Pair up an alternating key/value sequence. An odd-length input has its
/// last element reinterpreted as a value under the synthetic key `no_key`,
/// appended after all complete pairs: `[a]` becomes `[no_key, a]`,
/// `[a, b, c]` becomes `[a, b, no_key, c]`.
fn normalize_args(args: &[Value]) -> Vec<Value> {
    if args.len() % 2 == 0 {
        return args.to_vec();
    }

    let (pairs, orphan) = args.split_at(args.len() - 1);

    let mut out = Vec::with_capacity(args.len() + 1);
    out.extend_from_slice(pairs);
    out.push(Value::from(NO_KEY));
    out.extend_from_slice(orphan);
    out
}

/// Fold normalized pairs into a sorted map keyed by each key's bare string
/// form; later duplicates overwrite earlier ones. Empty input stays `None`.
fn args_map(args: &[Value]) -> Option<BTreeMap<String, Value>> {
    if args.is_empty() {
        return None;
    }

    let normalized = normalize_args(args);

    let mut map = BTreeMap::new();
    for pair in normalized.chunks_exact(2) {
        if let [key, value] = pair {
            map.insert(key.to_string(), value.clone());
        }
    }

    Some(map)
}
