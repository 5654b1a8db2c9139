//! Request capability traits.
//!
//! A request kind declares its capabilities explicitly: the HTTP method and
//! path it targets, the serialization [`Format`](crate::Format) of its
//! documents, the wire [`Payload`] it carries, and (through [`Authorize`])
//! whether the remote only accepts it signed. The dispatcher reads these
//! declarations; it never inspects request internals.

use chrono::NaiveDate;

use crate::signature::Auth;
use crate::{ApiResponse, Format, Method, Result};

/// Wire capabilities a request declares.
///
/// A kind may declare a serialized document, flat parameters, both, or
/// neither; the serializer adapter decides placement from what is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    /// Serialized business document (XML or JSON, per the declared format).
    pub document: Option<String>,
    /// Flat key-value parameters.
    pub params: Vec<(String, String)>,
}

impl Payload {
    /// A payload with no declared capability: the call is dispatched with
    /// only method and address.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A payload carrying a serialized document.
    #[must_use]
    pub fn document(document: String) -> Self {
        Self {
            document: Some(document),
            params: Vec::new(),
        }
    }

    /// A payload carrying flat key-value parameters.
    #[must_use]
    pub fn params(params: Vec<(String, String)>) -> Self {
        Self {
            document: None,
            params,
        }
    }
}

/// A logical request against the remote API.
///
/// Implementations are passive declarations: the dispatcher reads the
/// declared capabilities and drives the whole exchange.
pub trait ApiRequest: Sized + Send {
    /// The structured response type this kind expects when the remote
    /// answers with an XML or JSON document.
    type Response: serde::de::DeserializeOwned + ApiResponse + Send;

    /// Operation name, used by the dynamic dispatch entry point.
    const NAME: &'static str;

    /// HTTP method.
    fn method(&self) -> Method;

    /// Path of the operation's endpoint, relative to the client's base URL.
    fn path(&self) -> &str;

    /// Serialization format of the request document.
    fn format(&self) -> Format {
        Format::Xml
    }

    /// The wire payload this request declares.
    ///
    /// # Errors
    ///
    /// Returns an error if serializing the request document fails.
    fn payload(&self) -> Result<Payload>;

    /// Hook applied before serialization for kinds the remote requires a
    /// signature on; the default leaves the request unsigned.
    ///
    /// Signed kinds implement this by delegating to [`Auth::apply`], which
    /// attaches the date and then the credentials, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind rejects the credentials.
    fn sign(self, _auth: &Auth<'_>) -> Result<Self> {
        Ok(self)
    }
}

/// Capability of request kinds the remote only accepts signed.
pub trait Authorize: Sized {
    /// Attach the signing date.
    #[must_use]
    fn date(self, date: NaiveDate) -> Self;

    /// Attach the account and its date-bound token.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected (for example, an
    /// empty account); the failure propagates to the caller unmodified.
    fn credentials(self, account: &str, token: &str) -> Result<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_none_declares_nothing() {
        let payload = Payload::none();
        assert_eq!(payload.document, None);
        assert!(payload.params.is_empty());
    }

    #[test]
    fn payload_document() {
        let payload = Payload::document("<Probe/>".to_string());
        assert_eq!(payload.document.as_deref(), Some("<Probe/>"));
        assert!(payload.params.is_empty());
    }

    #[test]
    fn payload_params() {
        let payload = Payload::params(vec![("foo".to_string(), "bar".to_string())]);
        assert_eq!(payload.document, None);
        assert_eq!(payload.params.len(), 1);
    }
}
