//! Browser logging bootstrap.
//!
//! Installs a `tracing-subscriber` fmt layer whose writer forwards each
//! formatted event to the matching `console.*` method. The wasm target has
//! no wall clock for the default timer, so timestamps are off.

use std::io;

use reelforge_core::config::LogLevel;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the global subscriber. Safe to call twice; the second call
/// only reports that a subscriber already exists.
pub fn init(level: LogLevel) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level.as_tracing_level())
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "[reelforge][warn] logging already initialised: {e}"
        )));
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        let message = JsValue::from_str(line.trim_end());
        match console_method(self.level) {
            ConsoleMethod::Error => web_sys::console::error_1(&message),
            ConsoleMethod::Warn => web_sys::console::warn_1(&message),
            ConsoleMethod::Log => web_sys::console::log_1(&message),
            ConsoleMethod::Debug => web_sys::console::debug_1(&message),
        }
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Log,
    Debug,
}

fn console_method(level: Level) -> ConsoleMethod {
    if level == Level::ERROR {
        ConsoleMethod::Error
    } else if level == Level::WARN {
        ConsoleMethod::Warn
    } else if level == Level::INFO {
        ConsoleMethod::Log
    } else {
        ConsoleMethod::Debug
    }
}
