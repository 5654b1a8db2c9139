//! Prelude module for convenient imports.
//!
//! ```ignore
//! use consign::prelude::*;
//! ```

pub use crate::requests::{
    CalculationRequest, Package, PickupPointsRequest, PrintReceiptsRequest, StatusReportRequest,
};
pub use crate::responses::{
    CalculationResponse, Order, PickupPoint, PickupPointsResponse, ReceiptsResponse,
    StatusReportResponse,
};
pub use crate::{
    ApiRequest, ApiResponse, ConsignClient, Error, HyperTransport, LogSink, Message, Outcome,
    Result, TracingLog, Transport, TransportConfig,
};
