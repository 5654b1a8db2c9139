//! Transport options built for one HTTP exchange.

use std::collections::HashMap;

/// The option bag handed to the transport for a single call.
///
/// This is an implementation contract between the dispatcher and the
/// transport, not a wire format: the transport decides how query pairs,
/// form fields, a raw body, and headers are assembled into the actual
/// HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Query string parameters appended to the address.
    pub query: Vec<(String, String)>,
    /// Form fields sent as an `application/x-www-form-urlencoded` body.
    pub form: Vec<(String, String)>,
    /// Raw request body, for kinds that are not form-encoded.
    pub body: Option<String>,
    /// Extra request headers (notably `Content-Type` for raw bodies).
    pub headers: HashMap<String, String>,
}

impl TransportOptions {
    /// Returns `true` if no option was set: the call is dispatched with
    /// only method and address.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.form.is_empty() && self.body.is_none() && self.headers.is_empty()
    }

    /// Value of a form field by name, if present.
    #[must_use]
    pub fn form_field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a query parameter by name, if present.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value.as_str())
    }
}
