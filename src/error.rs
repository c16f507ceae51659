//! Error taxonomy (spec §7): exactly one fatal variant. Everything else a
//! compilation can discover (unmatched tunnels, timing cycles) is data, not
//! an error — it is logged via `log` and also collected into
//! [`Diagnostics`] so callers that aren't watching logs still see it.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("invalid blueprint geometry: {width}x{height}")]
    InvalidGeometry { width: usize, height: usize },
}

/// Non-fatal anomalies discovered during compilation or analysis, collected
/// alongside whatever log lines were emitted for the same events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
