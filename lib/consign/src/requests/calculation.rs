//! Shipping price calculation request.

use serde::Serialize;

use consign_core::{ApiRequest, Format, Method, Payload, Result, to_json};

use crate::responses::CalculationResponse;

/// Calculate the delivery price for a set of packages.
///
/// JSON POST against the public calculator; no signature required.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_city_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    receiver_city_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tariff_id: Option<u32>,
    goods: Vec<Package>,
}

/// One package in a calculation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Weight in kilograms.
    pub weight: f64,
    /// Length in centimeters.
    pub length: u32,
    /// Width in centimeters.
    pub width: u32,
    /// Height in centimeters.
    pub height: u32,
}

impl CalculationRequest {
    /// An empty calculation request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender city.
    #[must_use]
    pub const fn from_city(mut self, city_id: u32) -> Self {
        self.sender_city_id = Some(city_id);
        self
    }

    /// Set the receiver city.
    #[must_use]
    pub const fn to_city(mut self, city_id: u32) -> Self {
        self.receiver_city_id = Some(city_id);
        self
    }

    /// Set the tariff.
    #[must_use]
    pub const fn tariff(mut self, tariff_id: u32) -> Self {
        self.tariff_id = Some(tariff_id);
        self
    }

    /// Add a package.
    #[must_use]
    pub fn package(mut self, package: Package) -> Self {
        self.goods.push(package);
        self
    }
}

impl ApiRequest for CalculationRequest {
    type Response = CalculationResponse;

    const NAME: &'static str = "calculation";

    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> &str {
        "/calculator/calculate_price_by_json.php"
    }

    fn format(&self) -> Format {
        Format::Json
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::document(to_json(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_camel_case_json() {
        let request = CalculationRequest::new()
            .from_city(44)
            .to_city(137)
            .tariff(1)
            .package(Package {
                weight: 1.2,
                length: 30,
                width: 20,
                height: 10,
            });

        let json = to_json(&request).expect("serialize");
        assert!(json.contains(r#""senderCityId":44"#), "got: {json}");
        assert!(json.contains(r#""receiverCityId":137"#), "got: {json}");
        assert!(json.contains(r#""goods":[{"weight":1.2"#), "got: {json}");
    }

    #[test]
    fn declares_a_json_document_payload() {
        let request = CalculationRequest::new().tariff(1);

        assert_eq!(request.format(), Format::Json);
        let payload = request.payload().expect("payload");
        assert!(payload.document.is_some());
        assert!(payload.params.is_empty());
    }
}
