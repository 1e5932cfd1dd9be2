//! Console and log reporting
//!
//! Both enumerators report the same way: a log line plus a console line for
//! each step, one console line per record field and a separator after every
//! record. The console writer is supplied by the caller.

use std::io::{self, Write};

/// Width of the separator printed after every record
pub const SEPARATOR_WIDTH: usize = 40;

/// A record that can be printed as a block of `Label: value` lines
pub trait Report {
    /// Identifier used in the "Fetching details" line
    fn subject(&self) -> &str;

    /// Labelled fields in display order
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Writes progress, records and failures to the log and a console writer
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter and return the console writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Informational step, e.g. "Fetching list of ..."
    pub fn progress(&mut self, message: &str) {
        tracing::info!("{}", message);
        self.line(message);
    }

    /// Start of one item: "Fetching details for <kind>: <name>"
    pub fn item(&mut self, kind: &str, name: &str) {
        tracing::info!("Fetching details for {}: {}", kind, name);
        self.line(&format!("Fetching details for {}: {}", kind, name));
    }

    /// Field block followed by the separator
    pub fn record<R: Report>(&mut self, record: &R) {
        tracing::debug!("Reporting {}", record.subject());
        for (label, value) in record.fields() {
            self.line(&format!("{}: {}", label, value));
        }
        self.line(&"-".repeat(SEPARATOR_WIDTH));
    }

    /// Notice for an empty listing
    pub fn none_found(&mut self, message: &str) {
        tracing::warn!("{}", message);
        self.line(message);
    }

    /// Failure line; `detail` goes to the log, `display` to the console
    pub fn failure(&mut self, subject: &str, detail: &str, display: &str) {
        tracing::error!("Error fetching {}: {}", subject, detail);
        self.line(&format!("Error fetching {}: {}", subject, display));
    }

    /// Free-form console line without a log entry
    pub fn line(&mut self, text: &str) {
        // A closed stdout should not abort the scan
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::debug!("Console write failed: {}", e);
        }
    }
}
