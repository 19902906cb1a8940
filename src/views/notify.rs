// src/views/notify.rs
//! Uniform user-facing error reporting
//!
//! Load failures live on as view state and are reported as persistent
//! notices; validation and submission failures are one-shot transient
//! notices. Both go through the same interface.

use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeMode {
    /// Backed by a terminal view state that keeps rendering the failure
    Persistent,
    /// Shown once, then gone; the owning draft stays editable
    Transient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub mode: NoticeMode,
    pub message: String,
}

impl Notice {
    pub fn persistent(message: impl Into<String>) -> Self {
        Self {
            mode: NoticeMode::Persistent,
            message: message.into(),
        }
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            mode: NoticeMode::Transient,
            message: message.into(),
        }
    }
}

/// Sink for every user-facing error raised by the views
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Terminal notifier; routes notices through the log layer on stderr
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.mode {
            NoticeMode::Persistent => error!("{}", notice.message),
            NoticeMode::Transient => warn!("{}", notice.message),
        }
    }
}

#[cfg(test)]
pub(crate) struct RecordingNotifier {
    notices: std::sync::Mutex<Vec<Notice>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            notices: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
