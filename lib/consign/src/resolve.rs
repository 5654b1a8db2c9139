//! Response classification and materialization.
//!
//! The shape of a reply is decided from the response itself - its headers
//! and content type - never from what the caller expected. Classification
//! is total: a generic passthrough shape always exists, so this step cannot
//! fail. Materialization can still fail when a structured body does not
//! deserialize.

use consign_core::{
    ApiResponse, FileResponse, Format, Outcome, RawResponse, Result, Structured, from_json,
    from_xml,
};

/// The materialization strategy chosen for one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Deserialize the body as a structured document in the given format.
    Structured(Format),
    /// Keep the body verbatim as a file attachment.
    Attachment,
    /// Hand the raw response through untouched.
    Passthrough,
}

/// Classify a raw response into a materialization strategy.
///
/// Attachment detection takes priority over the content type: some
/// endpoints return files in-band under XML-typed wrappers.
#[must_use]
pub fn classify(response: &RawResponse) -> ResponseShape {
    let is_attachment = response
        .header("Content-Disposition")
        .is_some_and(|value| value.to_ascii_lowercase().contains("attachment"));
    if is_attachment {
        return ResponseShape::Attachment;
    }

    match response.content_type().and_then(Format::from_content_type) {
        Some(format) => ResponseShape::Structured(format),
        None => ResponseShape::Passthrough,
    }
}

/// Materialize a raw response according to the chosen shape.
///
/// # Errors
///
/// Returns an error if a structured body fails to deserialize; the failure
/// propagates to the caller uncaught.
pub fn materialize<T>(shape: ResponseShape, response: RawResponse) -> Result<Outcome<T>>
where
    T: serde::de::DeserializeOwned + ApiResponse,
{
    match shape {
        ResponseShape::Structured(format) => {
            let payload = match format {
                Format::Xml => from_xml(&response.text())?,
                Format::Json => from_json(response.body())?,
            };
            Ok(Outcome::Structured(Structured::new(
                response.status(),
                response.reason(),
                payload,
            )))
        }
        ResponseShape::Attachment => {
            let status = response.status();
            let reason = response.reason().to_string();
            Ok(Outcome::File(FileResponse::new(
                status,
                reason,
                response.into_body(),
            )))
        }
        ResponseShape::Passthrough => Ok(Outcome::Raw(response)),
    }
}
