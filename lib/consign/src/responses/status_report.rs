//! Delivery status registry response.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use consign_core::{ApiResponse, Message};

use super::ServiceError;

/// The delivery status registry for a date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "StatusReport", rename_all = "PascalCase")]
pub struct StatusReportResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    date_first: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_last: Option<NaiveDate>,
    #[serde(rename = "Order", default)]
    orders: Vec<Order>,
    #[serde(rename = "Error", default)]
    errors: Vec<ServiceError>,
}

impl StatusReportResponse {
    /// First day covered by the report.
    #[must_use]
    pub const fn date_first(&self) -> Option<NaiveDate> {
        self.date_first
    }

    /// Last day covered by the report.
    #[must_use]
    pub const fn date_last(&self) -> Option<NaiveDate> {
        self.date_last
    }

    /// Orders covered by the report.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl ApiResponse for StatusReportResponse {
    fn messages(&self) -> Vec<Message> {
        self.errors.iter().map(ServiceError::to_message).collect()
    }
}

/// One order record in the status registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Order", rename_all = "PascalCase")]
pub struct Order {
    dispatch_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<OrderStatus>,
}

impl Order {
    /// The provider-assigned dispatch number.
    #[must_use]
    pub fn dispatch_number(&self) -> &str {
        &self.dispatch_number
    }

    /// The sender-assigned order number, if reported.
    #[must_use]
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// The order's current status, if reported.
    #[must_use]
    pub const fn status(&self) -> Option<&OrderStatus> {
        self.status.as_ref()
    }
}

/// Current status of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Status", rename_all = "PascalCase")]
pub struct OrderStatus {
    date: NaiveDate,
    code: u32,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    city_name: Option<String>,
}

impl OrderStatus {
    /// Day the status was reached.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Numeric status code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Human-readable status description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// City the status was reported from.
    #[must_use]
    pub fn city_name(&self) -> Option<&str> {
        self.city_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use consign_core::{from_xml, to_xml};

    use super::*;

    const REPORT: &str = "\
<StatusReport>\
<DateFirst>2018-04-06</DateFirst>\
<DateLast>2018-04-06</DateLast>\
<Order>\
<DispatchNumber>1000028000</DispatchNumber>\
<Number>2113-1</Number>\
<Status><Date>2018-04-06</Date><Code>1</Code><Description>Created</Description><CityName>Marseille</CityName></Status>\
</Order>\
</StatusReport>";

    #[test]
    fn deserializes_orders() {
        let report: StatusReportResponse = from_xml(REPORT).expect("deserialize");

        assert_eq!(report.orders().len(), 1);
        let order = &report.orders()[0];
        assert_eq!(order.dispatch_number(), "1000028000");
        assert_eq!(order.number(), Some("2113-1"));

        let status = order.status().expect("status");
        assert_eq!(status.code(), 1);
        assert_eq!(status.description(), "Created");
        assert_eq!(status.city_name(), Some("Marseille"));

        assert!(!report.has_errors());
    }

    #[test]
    fn round_trip_preserves_field_values() {
        let report: StatusReportResponse = from_xml(REPORT).expect("deserialize");
        let xml = to_xml(&report).expect("serialize");
        let back: StatusReportResponse = from_xml(&xml).expect("round trip");

        assert_eq!(back, report);
    }

    #[test]
    fn service_errors_surface_as_messages() {
        let report: StatusReportResponse = from_xml(
            "<StatusReport><Error><Code>ERR_SECURE</Code><Text>signature check failed</Text></Error></StatusReport>",
        )
        .expect("deserialize");

        assert!(report.has_errors());
        let messages = report.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].error_code(), "ERR_SECURE");
    }
}
