//! Shipping price calculation response.

use serde::Deserialize;

use consign_core::{ApiResponse, Message};

/// Result of a price calculation, or the reasons it was refused.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(default)]
    result: Option<CalculationResult>,
    #[serde(default)]
    messages: Vec<Message>,
}

impl CalculationResponse {
    /// The calculated price and delivery window, when the calculation
    /// succeeded.
    #[must_use]
    pub const fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }
}

impl ApiResponse for CalculationResponse {
    fn messages(&self) -> Vec<Message> {
        self.messages.clone()
    }
}

/// Price and delivery window for one calculation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    price: f64,
    delivery_period_min: u32,
    delivery_period_max: u32,
}

impl CalculationResult {
    /// Delivery price in the account's currency.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Minimum delivery period, in days.
    #[must_use]
    pub const fn delivery_period_min(&self) -> u32 {
        self.delivery_period_min
    }

    /// Maximum delivery period, in days.
    #[must_use]
    pub const fn delivery_period_max(&self) -> u32 {
        self.delivery_period_max
    }
}

#[cfg(test)]
mod tests {
    use consign_core::from_json;

    use super::*;

    #[test]
    fn deserializes_a_successful_calculation() {
        let response: CalculationResponse = from_json(
            br#"{"result":{"price":1250.0,"deliveryPeriodMin":2,"deliveryPeriodMax":4}}"#,
        )
        .expect("deserialize");

        let result = response.result().expect("result");
        assert!((result.price() - 1250.0).abs() < f64::EPSILON);
        assert_eq!(result.delivery_period_min(), 2);
        assert_eq!(result.delivery_period_max(), 4);
        assert!(!response.has_errors());
    }

    #[test]
    fn deserializes_an_error_reply() {
        let response: CalculationResponse = from_json(
            br#"{"messages":[{"errorCode":"ERR_TARIFF_UNAVAILABLE","message":"tariff is not available for the given route"}]}"#,
        )
        .expect("deserialize");

        assert!(response.result().is_none());
        assert!(response.has_errors());
        assert_eq!(response.messages().len(), 1);
    }
}
