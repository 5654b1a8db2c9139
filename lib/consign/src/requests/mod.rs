//! Request catalog.
//!
//! Each request kind is a passive declaration: its target path, method,
//! serialization format, expected response type, and wire payload. The
//! client reads these declarations and drives the exchange; request types
//! never touch the network themselves.

mod calculation;
mod pickup_points;
mod print_receipts;
mod status_report;

pub use calculation::{CalculationRequest, Package};
pub use pickup_points::PickupPointsRequest;
pub use print_receipts::PrintReceiptsRequest;
pub use status_report::StatusReportRequest;
