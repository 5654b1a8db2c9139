//! HTTP transport seam.
//!
//! The dispatcher talks to the network through [`Transport`], which settles
//! every exchange into one of three outcomes: a readable response, a
//! failure that still carried a response, or a failure with nothing to
//! inspect. The split makes the dispatcher's recovery path exhaustive
//! instead of relying on inspecting exception internals.

use std::future::Future;

use derive_more::{Display, Error};

use crate::{Error as CoreError, Method, RawResponse, TransportOptions};

/// A failed HTTP exchange, as seen at the transport boundary.
#[derive(Debug, Display, Error)]
pub enum TransportFailure {
    /// The remote answered, but with an error-indicating status; the
    /// response is available for inspection.
    #[display("{source}")]
    WithResponse {
        /// The response the remote sent alongside the failure.
        response: RawResponse,
        /// The underlying error.
        source: CoreError,
    },

    /// The exchange failed before any response could be read
    /// (connectivity, TLS, timeout).
    #[display("{_0}")]
    WithoutResponse(CoreError),
}

impl TransportFailure {
    /// The underlying error, whichever variant carries it.
    #[must_use]
    pub const fn error(&self) -> &CoreError {
        match self {
            Self::WithResponse { source, .. } => source,
            Self::WithoutResponse(source) => source,
        }
    }
}

/// Result of one HTTP exchange.
pub type TransportResult = Result<RawResponse, TransportFailure>;

/// One synchronous round trip over HTTP.
///
/// Implementations must collect the body into the [`RawResponse`] snapshot
/// before returning; no one-shot stream may escape this boundary. Timeout,
/// pooling, and retry policy all belong to the implementation.
pub trait Transport: Send + Sync {
    /// Execute one HTTP exchange.
    fn execute(
        &self,
        method: Method,
        url: url::Url,
        options: TransportOptions,
    ) -> impl Future<Output = TransportResult> + Send;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn failure_display_uses_underlying_error() {
        let failure = TransportFailure::WithResponse {
            response: RawResponse::new(500, "Server error", HashMap::new(), ""),
            source: CoreError::http(500, "Server error"),
        };
        assert_eq!(failure.to_string(), "HTTP error 500: Server error");

        let failure = TransportFailure::WithoutResponse(CoreError::Timeout);
        assert_eq!(failure.to_string(), "request timeout");
    }

    #[test]
    fn failure_error_accessor() {
        let failure = TransportFailure::WithoutResponse(CoreError::connection("refused"));
        assert!(failure.error().is_connection());
    }
}
