//! Activity Log
//!
//! Append-only, user-visible trace of client actions and outcomes.

use leptos::prelude::*;

/// Severity of a log entry. Only used for styling and console routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Error,
}

/// One line of the activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub kind: LogKind,
    /// Wall-clock time the entry was appended, already formatted.
    pub stamp: String,
    pub message: String,
}

/// Where the client writes its activity trace.
pub trait LogSink {
    fn append(&self, kind: LogKind, message: String);
}

/// Signal-backed sink rendered by the `ActivityLog` panel. Entries are
/// mirrored to the browser console.
#[derive(Clone, Copy)]
pub struct SignalLog {
    entries: RwSignal<Vec<LogEntry>>,
}

impl SignalLog {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> RwSignal<Vec<LogEntry>> {
        self.entries
    }
}

impl LogSink for SignalLog {
    fn append(&self, kind: LogKind, message: String) {
        match kind {
            LogKind::Info => log::info!("{message}"),
            LogKind::Error => log::error!("{message}"),
        }
        let stamp = String::from(js_sys::Date::new_0().to_locale_time_string("en-US"));
        self.entries.update(|entries| {
            entries.push(LogEntry {
                kind,
                stamp,
                message,
            })
        });
    }
}
