//! Serialization formats for request and response documents.

use derive_more::Display;

/// Wire format of a structured document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Format {
    /// XML document (`application/xml`).
    #[display("application/xml")]
    Xml,
    /// JSON document (`application/json`).
    #[display("application/json")]
    Json,
}

impl Format {
    /// MIME type sent in the `Content-Type` header for this format.
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        match self {
            Self::Xml => "application/xml",
            Self::Json => "application/json",
        }
    }

    /// Resolve a response `Content-Type` header value to a structured format.
    ///
    /// Matching is case-insensitive and ignores parameters after `;`
    /// (e.g. `text/xml; charset=utf-8` resolves to [`Format::Xml`]).
    /// Returns `None` for anything that is not a recognized structured type.
    #[must_use]
    pub fn from_content_type(value: &str) -> Option<Self> {
        let essence = value.split(';').next().unwrap_or_default().trim();

        if essence.eq_ignore_ascii_case("text/xml") || essence.eq_ignore_ascii_case("application/xml")
        {
            return Some(Self::Xml);
        }
        if essence.eq_ignore_ascii_case("application/json") {
            return Some(Self::Json);
        }
        None
    }
}
