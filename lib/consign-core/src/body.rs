//! Body serialization utilities.

use crate::Result;

/// Serialize a value to an XML document string.
///
/// # Errors
///
/// Returns an error if XML serialization fails.
pub fn to_xml<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_xml_rs::to_string(value).map_err(Into::into)
}

/// Deserialize an XML document into a value.
///
/// # Errors
///
/// Returns an error if XML deserialization fails.
pub fn from_xml<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
    serde_xml_rs::from_str(text).map_err(Into::into)
}

/// Serialize a value to a JSON document string.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so failures name the exact field that could
/// not be deserialized (e.g., "messages.0.errorCode").
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

/// Encode flat key-value pairs as an `application/x-www-form-urlencoded`
/// body.
///
/// # Errors
///
/// Returns an error if form serialization fails.
pub fn to_form_urlencoded(pairs: &[(String, String)]) -> Result<String> {
    serde_urlencoded::to_string(pairs).map_err(Into::into)
}
