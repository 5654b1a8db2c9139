//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use consign_core::prelude::*;
//! ```

pub use crate::{
    ApiRequest, ApiResponse, Authorize, Error, ErrorResponse, FileResponse, Format, Message,
    Method, Outcome, Payload, RawResponse, Result, Structured, Transport, TransportFailure,
    TransportOptions, from_json, from_xml, to_json, to_xml,
};
