//! Notification sink.
//!
//! Operations emit human-readable success/error messages; delivery (a toast
//! panel, a log line, a test buffer) is behind this trait.

/// Receives user-facing notifications.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Notification kind plus message, as captured by `MemoryNotifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Buffers notifications in memory; used by tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    pub notices: Vec<Notice>,
}

impl MemoryNotifier {
    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl Notifier for MemoryNotifier {
    fn success(&mut self, message: &str) {
        self.notices.push(Notice::Success(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.notices.push(Notice::Error(message.to_string()));
    }
}

/// Routes notifications to the log; the CLI uses this.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&mut self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&mut self, message: &str) {
        tracing::error!("{message}");
    }
}
