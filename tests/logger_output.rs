//! End-to-end logger behavior against an in-memory sink.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use kvlog::{ColorMode, Handler, Level, Logger, Value};

/// A cloneable sink; the logger owns one handle, the test keeps another.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        let buf = self.0.lock().unwrap();
        String::from_utf8(buf.clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logger_with_sink() -> (Logger, SharedBuf) {
    let sink = SharedBuf::default();
    let mut logger = Logger::new();
    logger.set_output(Some(Box::new(sink.clone())));
    logger.set_colors(ColorMode::Never);
    (logger, sink)
}

#[test]
fn suppressed_call_performs_no_write() {
    let (mut logger, sink) = logger_with_sink();
    logger.set_level(Level::Warn);

    let written = logger.info("below threshold", &[]).unwrap();
    assert_eq!(written, 0);
    assert_eq!(sink.contents(), "");

    assert!(logger.warn("at threshold", &[]).unwrap() > 0);
    assert!(logger.error("above threshold", &[]).unwrap() > 0);
    assert_eq!(sink.contents().lines().count(), 2);
}

#[test]
fn debug_requires_lowered_threshold() {
    let (mut logger, sink) = logger_with_sink();

    assert_eq!(logger.debug("hidden", &[]).unwrap(), 0);

    logger.set_level(Level::Debug);
    assert!(logger.debug("visible", &[]).unwrap() > 0);
    assert!(sink.contents().contains("level=DBG"));
}

#[test]
fn text_line_shape() {
    let (mut logger, sink) = logger_with_sink();

    let written = logger
        .info(
            "request served",
            &[
                Value::from("status"), Value::from(200),
                Value::from("path"), Value::from("/health"),
            ],
        )
        .unwrap();

    let line = sink.contents();
    assert_eq!(written, line.len());
    assert!(line.starts_with("timestamp="));
    assert!(line.ends_with("level=INF msg=\"request served\" path=\"/health\" status=200\n"));
}

#[test]
fn text_args_sort_and_quote() {
    let (mut logger, sink) = logger_with_sink();

    logger
        .info(
            "test",
            &[
                Value::from("key2"), Value::from("meaning"),
                Value::from("key"), Value::from(42),
            ],
        )
        .unwrap();

    assert!(sink.contents().ends_with(" key=42 key2=\"meaning\"\n"));
}

#[test]
fn odd_args_pair_under_no_key() {
    let (mut logger, sink) = logger_with_sink();

    logger.info("orphan value", &[Value::from("lonely")]).unwrap();

    assert!(sink.contents().ends_with(" no_key=\"lonely\"\n"));
}

#[test]
fn json_line_fields() {
    let (mut logger, sink) = logger_with_sink();
    logger.set_handler(Handler::Json);

    logger
        .error(
            "upstream failed",
            &[
                Value::from("attempt"), Value::from(3),
                Value::from("backend"), Value::from("b1"),
            ],
        )
        .unwrap();

    let line = sink.contents();
    assert!(line.ends_with('\n'));

    let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(parsed["level"], "err");
    assert_eq!(parsed["msg"], "upstream failed");
    assert_eq!(parsed["attempt"], 3);
    assert_eq!(parsed["backend"], "b1");
    assert!(parsed["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn json_args_emit_in_sorted_key_order() {
    let (mut logger, sink) = logger_with_sink();
    logger.set_handler(Handler::Json);

    logger
        .info(
            "ordering",
            &[
                Value::from("zeta"), Value::from(1),
                Value::from("alpha"), Value::from(2),
            ],
        )
        .unwrap();

    let line = sink.contents();
    let alpha = line.find("\"alpha\"").unwrap();
    let zeta = line.find("\"zeta\"").unwrap();
    assert!(alpha < zeta);
}

#[test]
fn fatal_writes_and_invokes_exit() {
    let (mut logger, sink) = logger_with_sink();

    // Threshold above fatal's peers; fatal must still fire.
    logger.set_level(Level::Error);

    let exit_code = Arc::new(Mutex::new(None));
    let observed = exit_code.clone();
    logger.set_exit(Box::new(move |code| {
        *observed.lock().unwrap() = Some(code);
    }));

    logger.fatal("shutting down", &[Value::from("reason"), Value::from("oom")]);

    assert_eq!(*exit_code.lock().unwrap(), Some(1));
    let line = sink.contents();
    assert!(line.contains("level=FTL"));
    assert!(line.contains("reason=\"oom\""));
}

#[test]
fn written_count_includes_newline() {
    let (mut logger, sink) = logger_with_sink();

    let written = logger.info("count me", &[]).unwrap();
    assert_eq!(written, sink.contents().len());
    assert!(sink.contents().ends_with('\n'));
}

#[test]
fn from_config_applies_settings() {
    let config: kvlog::Config =
        serde_json::from_str(r#"{"level":"warn","format":"json","color":"never"}"#).unwrap();

    let mut logger = Logger::from_config(&config);
    let sink = SharedBuf::default();
    logger.set_output(Some(Box::new(sink.clone())));

    assert_eq!(logger.level(), Level::Warn);
    assert_eq!(logger.info("dropped", &[]).unwrap(), 0);

    logger.warn("kept", &[]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(sink.contents().trim_end()).unwrap();
    assert_eq!(parsed["level"], "wrn");
}
