//! Tracing setup for the browser.
//!
//! `tracing-subscriber`'s fmt layer formats each event; [`ConsoleMakeWriter`]
//! hands the finished line to the matching `console.*` method. Timestamps
//! are off because `wasm32-unknown-unknown` has no system clock.

use std::io;

use anyhow::{Context, Result};
use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Filter used when `LANDING_LOG` was not set at build time.
pub const DEFAULT_FILTER: &str = "info";

/// Filter directive baked in at compile time.
pub fn filter_directive() -> &'static str {
    option_env!("LANDING_LOG").unwrap_or(DEFAULT_FILTER)
}

/// Install the global subscriber. Call once, before mounting.
pub fn init() -> Result<()> {
    let directive = filter_directive();
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid LANDING_LOG filter {directive:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

/// Browser console method an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    /// Console method for an event of `level`; DEBUG and TRACE share one.
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            _ => Self::Debug,
        }
    }

    fn emit(self, line: &str) {
        let value = JsValue::from_str(line);
        match self {
            Self::Error => web_sys::console::error_1(&value),
            Self::Warn => web_sys::console::warn_1(&value),
            Self::Info => web_sys::console::info_1(&value),
            Self::Debug => web_sys::console::debug_1(&value),
        }
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer);
        self.method.emit(text.trim_end());
    }
}

/// [`MakeWriter`] that targets the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
    }
}
