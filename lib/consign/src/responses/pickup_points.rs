//! Pickup point list response.

use serde::{Deserialize, Serialize};

use consign_core::ApiResponse;

/// The provider's pickup points matching the requested filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "PickupPointList")]
pub struct PickupPointsResponse {
    #[serde(rename = "PickupPoint", default)]
    points: Vec<PickupPoint>,
}

impl PickupPointsResponse {
    /// The matching pickup points; empty when no point matched.
    #[must_use]
    pub fn points(&self) -> &[PickupPoint] {
        &self.points
    }
}

impl ApiResponse for PickupPointsResponse {}

/// One pickup point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "PickupPoint", rename_all = "PascalCase")]
pub struct PickupPoint {
    code: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl PickupPoint {
    /// Provider-assigned point code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Street address, if published.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}
