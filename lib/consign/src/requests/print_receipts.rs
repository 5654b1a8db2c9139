//! Receipt printing request.

use chrono::NaiveDate;
use serde::Serialize;

use consign_core::signature::Auth;
use consign_core::{ApiRequest, Authorize, Method, Payload, Result, to_xml};

use crate::responses::ReceiptsResponse;

/// Request printable receipts for a set of orders.
///
/// Signed XML POST. The remote normally answers with a PDF attachment;
/// when it cannot, it answers with an XML error document instead, which is
/// why the kind still declares a structured response type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "ReceiptsPrint", rename_all = "PascalCase")]
pub struct PrintReceiptsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secure: Option<String>,
    copy_count: u8,
    #[serde(rename = "Order")]
    orders: Vec<OrderRef>,
}

/// Reference to one order by dispatch number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename = "Order", rename_all = "PascalCase")]
struct OrderRef {
    dispatch_number: String,
}

impl PrintReceiptsRequest {
    /// A receipt request with no orders yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an order by dispatch number.
    #[must_use]
    pub fn order(mut self, dispatch_number: impl Into<String>) -> Self {
        self.orders.push(OrderRef {
            dispatch_number: dispatch_number.into(),
        });
        self
    }

    /// Number of copies per receipt.
    #[must_use]
    pub const fn copies(mut self, count: u8) -> Self {
        self.copy_count = count;
        self
    }
}

impl Default for PrintReceiptsRequest {
    fn default() -> Self {
        Self {
            date: None,
            account: None,
            secure: None,
            copy_count: 1,
            orders: Vec::new(),
        }
    }
}

impl ApiRequest for PrintReceiptsRequest {
    type Response = ReceiptsResponse;

    const NAME: &'static str = "print_receipts";

    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> &str {
        "/print_receipts.php"
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::document(to_xml(self)?))
    }

    fn sign(self, auth: &Auth<'_>) -> Result<Self> {
        auth.apply(self)
    }
}

impl Authorize for PrintReceiptsRequest {
    fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    fn credentials(mut self, account: &str, token: &str) -> Result<Self> {
        self.account = Some(account.to_string());
        self.secure = Some(token.to_string());
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_orders_by_dispatch_number() {
        let request = PrintReceiptsRequest::new()
            .order("1000028000")
            .order("1000028001")
            .copies(2);
        let xml = to_xml(&request).expect("serialize");

        assert!(xml.contains("<ReceiptsPrint"), "got: {xml}");
        assert!(xml.contains("<CopyCount>2</CopyCount>"), "got: {xml}");
        assert!(
            xml.contains("<DispatchNumber>1000028000</DispatchNumber>"),
            "got: {xml}"
        );
        assert!(
            xml.contains("<DispatchNumber>1000028001</DispatchNumber>"),
            "got: {xml}"
        );
    }

    #[test]
    fn defaults_to_a_single_copy() {
        let xml = to_xml(&PrintReceiptsRequest::new()).expect("serialize");
        assert!(xml.contains("<CopyCount>1</CopyCount>"), "got: {xml}");
    }
}
