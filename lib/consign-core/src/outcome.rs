//! Materialized response shapes and the dispatch outcome.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::RawResponse;

/// One application-level message reported by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    error_code: String,
    message: String,
}

impl Message {
    /// Creates a new message.
    #[must_use]
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }

    /// Error code, empty for purely informational messages.
    #[must_use]
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// Human-readable message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Application-level error reporting common to structured responses.
///
/// Responses that carry no service messages keep the defaults.
pub trait ApiResponse {
    /// Service messages carried by the payload.
    #[must_use]
    fn messages(&self) -> Vec<Message> {
        Vec::new()
    }

    /// Whether any message reports an error code.
    #[must_use]
    fn has_errors(&self) -> bool {
        self.messages().iter().any(|m| !m.error_code().is_empty())
    }
}

/// A structured business payload with the transport status attached.
///
/// Composition rather than inheritance: the deserialized payload stays a
/// plain data type, and the HTTP status travels alongside it.
#[derive(Debug, Clone)]
pub struct Structured<T> {
    status: u16,
    reason: String,
    payload: T,
}

impl<T> Structured<T> {
    /// Creates a new structured response.
    #[must_use]
    pub fn new(status: u16, reason: impl Into<String>, payload: T) -> Self {
        Self {
            status,
            reason: reason.into(),
            payload,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// HTTP reason phrase.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The deserialized business payload.
    #[must_use]
    pub const fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume into the payload.
    #[must_use]
    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// A file attachment returned by the remote API, kept verbatim.
#[derive(Debug, Clone)]
pub struct FileResponse {
    status: u16,
    reason: String,
    body: Bytes,
}

impl FileResponse {
    /// Creates a new file response.
    #[must_use]
    pub fn new(status: u16, reason: impl Into<String>, body: Bytes) -> Self {
        Self {
            status,
            reason: reason.into(),
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// HTTP reason phrase.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The file content, byte for byte as received.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into the file bytes.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }
}

/// Error reply synthesized from an HTTP-level failure that still carried a
/// response.
///
/// Serializes as `{"statusCode": ..., "reasonPhrase": ..., "messages":
/// [{"errorCode": ..., "message": ...}]}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    status_code: u16,
    reason_phrase: String,
    messages: Vec<Message>,
}

impl ErrorResponse {
    /// Synthesize an error response from an HTTP status and reason phrase.
    ///
    /// The message list contains exactly one entry: the status code as text
    /// and the reason phrase.
    #[must_use]
    pub fn from_status(status: u16, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            status_code: status,
            reason_phrase: reason.clone(),
            messages: vec![Message::new(status.to_string(), reason)],
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status_code
    }

    /// HTTP reason phrase.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason_phrase
    }
}

impl ApiResponse for ErrorResponse {
    fn messages(&self) -> Vec<Message> {
        self.messages.clone()
    }
}

/// The resolved result of one dispatched call.
///
/// Exactly one shape is chosen per call, from the response itself (headers
/// and content type), never from a caller hint.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// Structured business payload, deserialized from XML or JSON.
    Structured(Structured<T>),
    /// Raw file attachment.
    File(FileResponse),
    /// Response kept as received (unrecognized content type).
    Raw(RawResponse),
    /// Error reply synthesized from an HTTP-level failure.
    Error(ErrorResponse),
}

impl<T> Outcome<T> {
    /// HTTP status code, whatever the shape.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Structured(structured) => structured.status(),
            Self::File(file) => file.status(),
            Self::Raw(raw) => raw.status(),
            Self::Error(error) => error.status(),
        }
    }

    /// HTTP reason phrase, whatever the shape.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Structured(structured) => structured.reason(),
            Self::File(file) => file.reason(),
            Self::Raw(raw) => raw.reason(),
            Self::Error(error) => error.reason(),
        }
    }

    /// The structured payload, if that shape was chosen.
    #[must_use]
    pub const fn structured(&self) -> Option<&Structured<T>> {
        match self {
            Self::Structured(structured) => Some(structured),
            _ => None,
        }
    }

    /// The file attachment, if that shape was chosen.
    #[must_use]
    pub const fn file(&self) -> Option<&FileResponse> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// The raw passthrough response, if that shape was chosen.
    #[must_use]
    pub const fn raw(&self) -> Option<&RawResponse> {
        match self {
            Self::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    /// The synthesized error reply, if the call recovered from an
    /// HTTP-level failure.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl<T: ApiResponse> Outcome<T> {
    /// Service messages carried by the outcome.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        match self {
            Self::Structured(structured) => structured.payload().messages(),
            Self::Error(error) => error.messages(),
            Self::File(_) | Self::Raw(_) => Vec::new(),
        }
    }

    /// Whether the outcome carries application-level errors.
    ///
    /// Callers branch on this instead of handling an exception for
    /// recovered HTTP failures.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        match self {
            Self::Structured(structured) => structured.payload().has_errors(),
            Self::Error(error) => error.has_errors(),
            Self::File(_) | Self::Raw(_) => false,
        }
    }
}
