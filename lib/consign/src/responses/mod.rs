//! Response catalog.
//!
//! Structured response types for the supported operations, plus the
//! service error element shared by the XML replies. File attachments and
//! generic passthrough replies are handled by the core shapes
//! ([`FileResponse`](consign_core::FileResponse) and
//! [`RawResponse`](consign_core::RawResponse)); only structured documents
//! need a type here.

mod calculation;
mod pickup_points;
mod receipts;
mod status_report;

pub use calculation::{CalculationResponse, CalculationResult};
pub use pickup_points::{PickupPoint, PickupPointsResponse};
pub use receipts::ReceiptsResponse;
pub use status_report::{Order, OrderStatus, StatusReportResponse};

use consign_core::Message;
use serde::{Deserialize, Serialize};

/// Service error element carried in-band by XML replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Error", rename_all = "PascalCase")]
pub struct ServiceError {
    code: String,
    text: String,
}

impl ServiceError {
    /// Error code reported by the remote.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable error text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Convert into the common message record.
    #[must_use]
    pub fn to_message(&self) -> Message {
        Message::new(self.code.clone(), self.text.clone())
    }
}
