//! Walkthrough of the logger surface: levels, args, odd args, formats.
//!
//! Run with `cargo run --example basic`.

use kvlog::{Handler, Level, Logger, Value};

fn main() {
    let mut log = Logger::new();

    // Debug calls are suppressed under the default info threshold.
    log.set_level(Level::Debug);

    let _ = log.debug("starting up", &[Value::from("mode"), Value::from("dev")]);
    let _ = log.info(
        "answer computed",
        &[
            Value::from("key"), Value::from(42),
            Value::from("value"), Value::from("meaning"),
        ],
    );
    let _ = log.warn("disk almost full", &[Value::from("used_pct"), Value::from(93.5)]);
    let _ = log.error("request failed", &[Value::from("status"), Value::from(502)]);

    // Structured values render as compact JSON.
    let _ = log.info(
        "session state",
        &[
            Value::from("session"),
            Value::from(serde_json::json!({"user": "anton", "age": 45})),
        ],
    );

    // A lone trailing value is paired with the synthetic key "no_key".
    let _ = log.info("orphan arg", &[Value::from("just-a-value")]);

    // Switch the output format; the same calls now emit JSON lines.
    log.set_handler(Handler::Json);

    let _ = log.info("hello json", &[]);
    let _ = log.info("with args", &[Value::from("key"), Value::from("value")]);

    // log.fatal("unrecoverable", &[]); // writes, then exits with code 1
}
