//! Leveled key/value logging with text and JSON output.
//!
//! One call takes a message plus alternating key/value arguments, filters by
//! severity, renders through the configured handler, and performs a single
//! write to the sink:
//!
//! ```
//! use kvlog::{Level, Logger, Value};
//!
//! let mut log = Logger::new();
//! log.set_level(Level::Debug);
//! let _ = log.info("listener ready", &[Value::from("port"), Value::from(8080)]);
//! ```
//!
//! Synchronous and unbuffered; no rotation, sampling, or background work.

pub mod color;
pub mod config;
pub mod error;
pub mod handler;
pub mod level;
pub mod logger;
pub mod message;
pub mod value;

pub use color::{Color, ColorMode};
pub use config::Config;
pub use error::{Error, Result};
pub use handler::Handler;
pub use level::Level;
pub use logger::{ExitFn, Logger, Sink, NO_KEY};
pub use message::Message;
pub use value::Value;
