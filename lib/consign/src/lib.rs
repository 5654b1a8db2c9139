//! Client for the Consign shipping-logistics remote API.
//!
//! The API speaks several request shapes - XML documents posted as form
//! fields, JSON documents, flat parameter requests - and answers with XML
//! or JSON documents, file attachments, or plain text. [`ConsignClient`]
//! resolves every reply from the response itself (headers and content
//! type, never a caller hint) and recovers HTTP error statuses into
//! error-bearing outcomes callers can branch on.
//!
//! # Example
//!
//! ```ignore
//! use consign::{ConsignClient, TracingLog};
//! use consign::requests::PickupPointsRequest;
//!
//! let client = ConsignClient::builder()
//!     .account("account")
//!     .secure("secure-key")
//!     .log(TracingLog)
//!     .build()?;
//!
//! let outcome = client.send(PickupPointsRequest::new().city(44)).await?;
//! if outcome.has_errors() {
//!     for message in outcome.messages() {
//!         eprintln!("{}: {}", message.error_code(), message.message());
//!     }
//! }
//! ```

mod client;
mod config;
mod log;
pub mod prelude;
pub mod requests;
mod resolve;
pub mod responses;
mod transport;

pub use client::{ConsignClient, ConsignClientBuilder, DEFAULT_BASE_URL};
pub use config::{TransportConfig, TransportConfigBuilder};
pub use log::{LogEntry, LogSink, NopLog, TracingLog};
pub use resolve::{ResponseShape, classify, materialize};
pub use transport::HyperTransport;

// Re-export core types
pub use consign_core::{
    ApiRequest, ApiResponse, Authorize, Error, ErrorResponse, FileResponse, Format, Message,
    Method, Outcome, Payload, RawResponse, Result, Structured, Transport, TransportFailure,
    TransportOptions, TransportResult, from_json, from_xml, to_json, to_xml,
};

// Re-export http types for status codes and headers
pub use consign_core::{StatusCode, header};

// Re-export the signing primitives
pub use consign_core::signature;

// Re-export url for transport implementations
pub use url;
