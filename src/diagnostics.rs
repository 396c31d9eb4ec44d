//! Non-fatal diagnostics
//!
//! Warnings such as an ambiguous `-W` abbreviation are written to stderr as
//! `progname: message` and startup continues. Every message is also kept so
//! callers (and tests) can inspect what was reported.

use std::fmt;

use tracing::warn;

/// Collects and optionally echoes non-fatal startup diagnostics
#[derive(Debug)]
pub struct Diagnostics {
    program_name: String,
    messages: Vec<String>,
    echo: bool,
}

impl Diagnostics {
    /// Diagnostics that are printed to stderr as they are reported
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            messages: Vec::new(),
            echo: true,
        }
    }

    /// Diagnostics that are only recorded
    pub fn quiet(program_name: impl Into<String>) -> Self {
        Self {
            echo: false,
            ..Self::new(program_name)
        }
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Report a non-fatal diagnostic
    pub fn warn(&mut self, message: impl fmt::Display) {
        let message = message.to_string();
        warn!(%message, "startup diagnostic");
        if self.echo {
            eprintln!("{}: {}", self.program_name, message);
        }
        self.messages.push(message);
    }

    /// Print a fatal diagnostic; the caller is responsible for exiting
    pub fn fatal(&self, error: &dyn fmt::Display) {
        eprintln!("{}: {}", self.program_name, error);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
