//! Debug-payload logging.
//!
//! The client logs the serialized request and raw response bodies of every
//! exchange, plus an error summary when the remote answers with an HTTP
//! error. The sink is handed to the client at construction so tests can
//! substitute a recording implementation; there is no global logger state.

use consign_core::RawResponse;

/// One debug-level entry emitted by the client.
#[derive(Debug, Clone, Copy)]
pub struct LogEntry<'a> {
    /// Human-readable message: a payload body or an error summary.
    pub message: &'a str,
    /// Display form of the causing error, set on HTTP-error entries.
    pub exception: Option<&'a str>,
    /// HTTP status code as text, set on HTTP-error entries.
    pub error_code: Option<&'a str>,
}

impl<'a> LogEntry<'a> {
    /// A plain payload entry.
    #[must_use]
    pub const fn payload(message: &'a str) -> Self {
        Self {
            message,
            exception: None,
            error_code: None,
        }
    }

    /// An HTTP-error summary entry with structured context fields.
    #[must_use]
    pub const fn http_error(message: &'a str, exception: &'a str, error_code: &'a str) -> Self {
        Self {
            message,
            exception: Some(exception),
            error_code: Some(error_code),
        }
    }
}

/// Sink for the client's debug-level log entries.
pub trait LogSink: Send + Sync {
    /// Record one debug-level entry.
    fn debug(&self, entry: LogEntry<'_>);
}

/// The default sink: discards every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLog;

impl LogSink for NopLog {
    fn debug(&self, _entry: LogEntry<'_>) {}
}

/// Sink forwarding entries to [`tracing`] at `DEBUG` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl LogSink for TracingLog {
    fn debug(&self, entry: LogEntry<'_>) {
        match (entry.exception, entry.error_code) {
            (Some(exception), Some(error_code)) => {
                tracing::debug!(exception, error_code, "{}", entry.message);
            }
            _ => tracing::debug!("{}", entry.message),
        }
    }
}

/// Log the exchanged payloads: the outbound serialized document when one
/// was sent, then the raw inbound body text.
pub(crate) fn log_payloads(sink: &dyn LogSink, document: Option<&str>, response: &RawResponse) {
    if let Some(document) = document {
        sink.debug(LogEntry::payload(document));
    }
    sink.debug(LogEntry::payload(&response.text()));
}
