//! Core types and traits for the consign shipping API client.
//!
//! This crate provides the foundational types used by consign:
//! - [`Method`] - HTTP method enum
//! - [`Format`] - serialization format of structured documents
//! - [`ApiRequest`], [`Payload`] and [`Authorize`] - request capability traits
//! - [`TransportOptions`] - the option bag built for one HTTP call
//! - [`Transport`], [`TransportFailure`] - HTTP transport seam
//! - [`RawResponse`] - a response as received, with a snapshotted body
//! - [`Outcome`], [`Structured`], [`FileResponse`], [`ErrorResponse`] -
//!   materialized response shapes
//! - [`Message`] and [`ApiResponse`] - application-level error reporting
//! - [`Error`] and [`Result`] - error handling
//! - [`signature`] - date-bound request signing

mod body;
mod error;
mod format;
mod method;
mod options;
mod outcome;
pub mod prelude;
mod request;
mod response;
pub mod signature;
mod transport;

pub use body::{from_json, from_xml, to_form_urlencoded, to_json, to_xml};
pub use error::{Error, Result};
pub use format::Format;
pub use method::Method;
pub use options::TransportOptions;
pub use outcome::{ApiResponse, ErrorResponse, FileResponse, Message, Outcome, Structured};
pub use request::{ApiRequest, Authorize, Payload};
pub use response::RawResponse;
pub use transport::{Transport, TransportFailure, TransportResult};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
