//! Output sinks - where delivered messages actually end up
//!
//! The dispatch core never talks to a real transport (SMTP, SMS gateway,
//! push service). Each strategy writes one line to an injected `Sink`, and
//! the hosting application decides what that sink is.

use std::io::{self, Write};
use std::sync::Mutex;

/// External consumer of delivered messages
pub trait Sink: Send + Sync {
    fn write(&self, line: &str) -> io::Result<()>;
}

/// Console sink - prints each line to stdout, optionally prefixed
/// with a channel label ("Email: Hi")
pub struct ConsoleSink {
    prefix: Option<String>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Prefix every line with a label
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        match &self.prefix {
            Some(prefix) => writeln!(out, "{}: {}", prefix, line),
            None => writeln!(out, "{}", line),
        }
    }
}

/// In-memory sink - records every line, for tests and dry inspection
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines received so far, in write order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
