//! Status reporting for one pipeline invocation.
//!
//! A `Reporter` is created per invocation and passed into the components
//! that emit status. Entries are kept in memory so results can surface
//! warnings to callers; they are mirrored to stderr as `[prefix] message`
//! lines only when stderr is a terminal.

use std::io::IsTerminal;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub level: ReportLevel,
    pub message: String,
}

#[derive(Debug)]
pub struct Reporter {
    prefix: &'static str,
    entries: Vec<ReportEntry>,
    mirror_to_stderr: bool,
}

impl Reporter {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            entries: Vec::new(),
            mirror_to_stderr: std::io::stderr().is_terminal(),
        }
    }

    /// Reporter that records entries without writing to stderr.
    pub fn silent(prefix: &'static str) -> Self {
        Self {
            prefix,
            entries: Vec::new(),
            mirror_to_stderr: false,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.record(ReportLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(ReportLevel::Warning, message.into());
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Warning messages recorded so far, in emission order.
    pub fn warnings(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.level == ReportLevel::Warning)
            .map(|e| e.message.clone())
            .collect()
    }

    fn record(&mut self, level: ReportLevel, message: String) {
        if self.mirror_to_stderr {
            match level {
                ReportLevel::Info => eprintln!("[{}] {}", self.prefix, message),
                ReportLevel::Warning => eprintln!("[{}] warning: {}", self.prefix, message),
            }
        }
        self.entries.push(ReportEntry { level, message });
    }
}
