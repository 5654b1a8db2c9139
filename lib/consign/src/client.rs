//! The Consign API client.
//!
//! [`ConsignClient`] drives one blocking round trip per call: sign the
//! request when its kind declares the capability, build the transport
//! options from the declared payload, transmit, then resolve the response
//! shape from the reply itself and materialize it. HTTP-level failures that
//! still carried a response are recovered into an error-bearing
//! [`Outcome`]; everything else surfaces as an error.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use url::Url;

use consign_core::signature::Auth;
use consign_core::{
    ApiRequest, Error, ErrorResponse, Format, Outcome, Result, Transport, TransportFailure,
    TransportOptions,
};

use crate::log::{self, LogEntry, LogSink, NopLog};
use crate::resolve::{classify, materialize};
use crate::transport::HyperTransport;

/// Base URL of the production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://integration.consign.net";

/// Form field carrying the serialized document of XML-classified requests.
const XML_REQUEST_FIELD: &str = "xml_request";

/// Client for the Consign shipping-logistics remote API.
///
/// Holds the account credential pair for its whole lifetime; everything
/// else is created per call and discarded. The client itself keeps no
/// per-call state, so it is safe to share across tasks whenever the
/// transport is.
///
/// # Example
///
/// ```ignore
/// use consign::{ConsignClient, requests::StatusReportRequest};
///
/// let client = ConsignClient::new("account", "secure-key")?;
/// let outcome = client.send(StatusReportRequest::new().show_history()).await?;
/// for order in outcome.structured().expect("structured").payload().orders() {
///     println!("{}", order.dispatch_number());
/// }
/// ```
pub struct ConsignClient<T = HyperTransport> {
    account: String,
    secure: String,
    base_url: Url,
    transport: T,
    log: Arc<dyn LogSink>,
}

impl ConsignClient<HyperTransport> {
    /// Create a client against the production endpoint with the bundled
    /// hyper transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse.
    pub fn new(account: impl Into<String>, secure: impl Into<String>) -> Result<Self> {
        Self::builder().account(account).secure(secure).build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> ConsignClientBuilder<HyperTransport> {
        ConsignClientBuilder::default()
    }
}

impl<T> ConsignClient<T> {
    /// The base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute address for an operation path.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }
}

impl<T: Transport> ConsignClient<T> {
    /// Dispatch a request, signing it against the current UTC date.
    ///
    /// # Errors
    ///
    /// Returns an error for failures the client does not recover:
    /// authentication rejection, serialization failures, transport
    /// failures with no readable response, and structured bodies that do
    /// not deserialize. An HTTP error status with a readable response is
    /// NOT an error here; it comes back as [`Outcome::Error`].
    pub async fn send<R: ApiRequest>(&self, request: R) -> Result<Outcome<R::Response>> {
        self.send_dated(request, Utc::now().date_naive()).await
    }

    /// Dispatch a request, signing it against the given reference date.
    ///
    /// # Errors
    ///
    /// See [`ConsignClient::send`].
    pub async fn send_dated<R: ApiRequest>(
        &self,
        request: R,
        date: NaiveDate,
    ) -> Result<Outcome<R::Response>> {
        let auth = Auth::new(&self.account, &self.secure, date);
        let request = request.sign(&auth)?;

        let (options, document) = build_options(&request)?;
        let url = self.endpoint(request.path())?;

        match self.transport.execute(request.method(), url, options).await {
            Ok(response) => {
                log::log_payloads(self.log.as_ref(), document.as_deref(), &response);
                materialize(classify(&response), response)
            }
            Err(TransportFailure::WithResponse { response, source }) => {
                log::log_payloads(self.log.as_ref(), document.as_deref(), &response);

                let summary = format!(
                    "Consign API responded with an HTTP error code {} ({})",
                    response.status(),
                    response.reason()
                );
                let exception = source.to_string();
                let error_code = response.status().to_string();
                self.log
                    .debug(LogEntry::http_error(&summary, &exception, &error_code));

                Ok(Outcome::Error(ErrorResponse::from_status(
                    response.status(),
                    response.reason(),
                )))
            }
            Err(TransportFailure::WithoutResponse(source)) => Err(source),
        }
    }

    /// Dispatch by operation name, for callers that route requests at
    /// runtime.
    ///
    /// The name must be the operation the request kind declares; anything
    /// else fails with [`Error::UnsupportedOperation`] before any network
    /// activity.
    ///
    /// # Errors
    ///
    /// See [`ConsignClient::send`], plus [`Error::UnsupportedOperation`]
    /// for an unmatched operation name.
    pub async fn send_named<R: ApiRequest>(
        &self,
        operation: &str,
        request: R,
    ) -> Result<Outcome<R::Response>> {
        if operation != R::NAME {
            return Err(Error::unsupported_operation(operation));
        }
        self.send(request).await
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ConsignClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsignClient")
            .field("account", &self.account)
            .field("base_url", &self.base_url)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

/// Build the transport option bag for a request from its declared payload.
///
/// Precedence is explicit: a request declaring both a serialized document
/// and flat parameters is sent as a document, and the parameters are
/// ignored. Returns the options together with the serialized document, when
/// one exists, for the payload log.
fn build_options<R: ApiRequest>(request: &R) -> Result<(TransportOptions, Option<String>)> {
    let payload = request.payload()?;
    let mut options = TransportOptions::default();

    if let Some(document) = payload.document {
        match request.format() {
            Format::Xml => {
                options
                    .form
                    .push((XML_REQUEST_FIELD.to_string(), document.clone()));
            }
            Format::Json => {
                options.body = Some(document.clone());
                options
                    .headers
                    .insert("Content-Type".to_string(), Format::Json.mime().to_string());
            }
        }
        return Ok((options, Some(document)));
    }

    if !payload.params.is_empty() {
        if request.method().carries_body() {
            options.form = payload.params;
        } else {
            options.query = payload.params;
        }
    }

    Ok((options, None))
}

/// Builder for [`ConsignClient`].
///
/// # Example
///
/// ```ignore
/// use consign::{ConsignClient, TracingLog};
///
/// let client = ConsignClient::builder()
///     .account("account")
///     .secure("secure-key")
///     .base_url("https://sandbox.consign.net")
///     .log(TracingLog)
///     .build()?;
/// ```
pub struct ConsignClientBuilder<T = HyperTransport> {
    account: String,
    secure: String,
    base_url: String,
    transport: T,
    log: Arc<dyn LogSink>,
}

impl Default for ConsignClientBuilder<HyperTransport> {
    fn default() -> Self {
        Self {
            account: String::new(),
            secure: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: HyperTransport::new(),
            log: Arc::new(NopLog),
        }
    }
}

impl<T> ConsignClientBuilder<T> {
    /// Set the account identifier.
    #[must_use]
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Set the account's secure key.
    #[must_use]
    pub fn secure(mut self, secure: impl Into<String>) -> Self {
        self.secure = secure.into();
        self
    }

    /// Set the base URL requests are resolved against.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the log sink receiving the debug payload entries.
    #[must_use]
    pub fn log(mut self, log: impl LogSink + 'static) -> Self {
        self.log = Arc::new(log);
        self
    }

    /// Replace the transport implementation.
    #[must_use]
    pub fn transport<U>(self, transport: U) -> ConsignClientBuilder<U> {
        ConsignClientBuilder {
            account: self.account,
            secure: self.secure,
            base_url: self.base_url,
            transport,
            log: self.log,
        }
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn build(self) -> Result<ConsignClient<T>> {
        Ok(ConsignClient {
            account: self.account,
            secure: self.secure,
            base_url: Url::parse(&self.base_url).map_err(Error::InvalidUrl)?,
            transport: self.transport,
            log: self.log,
        })
    }
}
