//! Pickup point list request.

use consign_core::{ApiRequest, Method, Payload, Result};

use crate::responses::PickupPointsResponse;

/// List the provider's pickup points, optionally filtered.
///
/// Parameter GET: set filters travel as query parameters.
#[derive(Debug, Clone, Default)]
pub struct PickupPointsRequest {
    city_id: Option<u32>,
    city_post_code: Option<String>,
    cashless_only: bool,
}

impl PickupPointsRequest {
    /// List every pickup point.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by city identifier.
    #[must_use]
    pub const fn city(mut self, city_id: u32) -> Self {
        self.city_id = Some(city_id);
        self
    }

    /// Filter by postal code.
    #[must_use]
    pub fn post_code(mut self, post_code: impl Into<String>) -> Self {
        self.city_post_code = Some(post_code.into());
        self
    }

    /// Only points accepting cashless payment.
    #[must_use]
    pub const fn cashless_only(mut self) -> Self {
        self.cashless_only = true;
        self
    }
}

impl ApiRequest for PickupPointsRequest {
    type Response = PickupPointsResponse;

    const NAME: &'static str = "pickup_points";

    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> &str {
        "/pvzlist.php"
    }

    fn payload(&self) -> Result<Payload> {
        let mut params = Vec::new();
        if let Some(city_id) = self.city_id {
            params.push(("cityid".to_string(), city_id.to_string()));
        }
        if let Some(post_code) = &self.city_post_code {
            params.push(("citypostcode".to_string(), post_code.clone()));
        }
        if self.cashless_only {
            params.push(("havecashless".to_string(), "true".to_string()));
        }
        Ok(Payload::params(params))
    }
}
