//! HTTP transport implementation using hyper-util.

use std::collections::HashMap;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use url::Url;

use consign_core::{
    Error, Method, RawResponse, Transport, TransportFailure, TransportOptions, TransportResult,
    to_form_urlencoded,
};

use crate::config::TransportConfig;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP transport using hyper-util with connection pooling and rustls TLS.
///
/// Error-indicating statuses (4xx/5xx) are surfaced as
/// [`TransportFailure::WithResponse`] with the collected response attached,
/// so the dispatcher can recover them; failures before a response could be
/// read become [`TransportFailure::WithoutResponse`].
#[derive(Debug, Clone)]
pub struct HyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: TransportConfig,
}

impl HyperTransport {
    /// Create a new transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a new transport with custom configuration.
    #[must_use]
    pub fn with_config(config: TransportConfig) -> Self {
        let connector = https_connector(&config);

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self { inner, config }
    }

    /// Get the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Assemble the option bag into a hyper request.
    fn build_hyper_request(
        method: Method,
        mut url: Url,
        options: TransportOptions,
    ) -> Result<http::Request<Full<Bytes>>, Error> {
        if !options.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &options.query {
                pairs.append_pair(name, value);
            }
        }

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = if let Some(body) = options.body {
            Full::new(Bytes::from(body))
        } else if options.form.is_empty() {
            Full::default()
        } else {
            let encoded = to_form_urlencoded(&options.form)?;
            builder = builder.header("Content-Type", FORM_CONTENT_TYPE);
            Full::new(Bytes::from(encoded))
        };

        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperTransport {
    async fn execute(
        &self,
        method: Method,
        url: Url,
        options: TransportOptions,
    ) -> TransportResult {
        let hyper_request = Self::build_hyper_request(method, url, options)
            .map_err(TransportFailure::WithoutResponse)?;

        let response = tokio::time::timeout(self.config.timeout, self.inner.request(hyper_request))
            .await
            .map_err(|_| TransportFailure::WithoutResponse(Error::Timeout))?
            .map_err(|e| TransportFailure::WithoutResponse(Self::map_hyper_error(e)))?;

        let status = response.status().as_u16();
        let reason = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let headers = Self::extract_headers(response.headers());

        // Snapshot the one-shot body stream before anything inspects it.
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| TransportFailure::WithoutResponse(Error::connection(e.to_string())))?
            .to_bytes();

        let raw = RawResponse::new(status, reason.clone(), headers, body);

        if status >= 400 {
            return Err(TransportFailure::WithResponse {
                source: Error::http(status, reason),
                response: raw,
            });
        }

        Ok(raw)
    }
}

/// Create an HTTPS connector with rustls and the Mozilla root certificates.
fn https_connector(config: &TransportConfig) -> HttpsConnector<HttpConnector> {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let mut http = HttpConnector::new();
    http.set_connect_timeout(Some(config.connect_timeout));
    http.enforce_http(false);

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .wrap_connector(http)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_transport() {
        let transport = HyperTransport::new();
        assert_eq!(transport.config().pool_idle_per_host, 32);
    }

    #[test]
    fn raw_body_takes_precedence_over_form_fields() {
        let url = Url::parse("https://api.example.com/calc").expect("valid URL");
        let options = TransportOptions {
            body: Some("{}".to_string()),
            form: vec![("ignored".to_string(), "yes".to_string())],
            ..TransportOptions::default()
        };

        let request =
            HyperTransport::build_hyper_request(Method::Post, url, options).expect("request");
        assert_eq!(request.method(), http::Method::POST);
        assert!(request.headers().get("Content-Type").is_none());
    }

    #[test]
    fn form_fields_become_urlencoded_body() {
        let url = Url::parse("https://api.example.com/report").expect("valid URL");
        let options = TransportOptions {
            form: vec![("xml_request".to_string(), "<Probe/>".to_string())],
            ..TransportOptions::default()
        };

        let request =
            HyperTransport::build_hyper_request(Method::Post, url, options).expect("request");
        let content_type = request
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok());
        assert_eq!(content_type, Some(FORM_CONTENT_TYPE));
    }

    #[test]
    fn query_pairs_are_appended_to_the_url() {
        let url = Url::parse("https://api.example.com/points").expect("valid URL");
        let options = TransportOptions {
            query: vec![("cityid".to_string(), "44".to_string())],
            ..TransportOptions::default()
        };

        let request =
            HyperTransport::build_hyper_request(Method::Get, url, options).expect("request");
        assert_eq!(
            request.uri().to_string(),
            "https://api.example.com/points?cityid=44"
        );
    }
}
