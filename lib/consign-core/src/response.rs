//! Raw HTTP response handling.

use std::borrow::Cow;
use std::collections::HashMap;

use bytes::Bytes;

/// An HTTP response exactly as the transport received it.
///
/// The body is captured into an immutable [`Bytes`] snapshot at the
/// transport boundary, so logging, classification, and materialization can
/// all re-read it; no one-shot stream ever reaches this type.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    reason: String,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl RawResponse {
    /// Creates a new raw response.
    #[must_use]
    pub fn new(
        status: u16,
        reason: impl Into<String>,
        headers: HashMap<String, String>,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            status,
            reason: reason.into(),
            headers,
            body: body.into(),
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

    /// Response headers, as received.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name, case-insensitive.
    ///
    /// Absent headers are simply `None`, never an error.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    /// Response body bytes.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Response body as text.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Consume into the body bytes.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
