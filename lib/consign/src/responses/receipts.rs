//! Receipt printing response.

use serde::{Deserialize, Serialize};

use consign_core::{ApiResponse, Message};

use super::ServiceError;

/// XML reply to a receipt printing request.
///
/// The remote normally answers receipt requests with a PDF attachment,
/// which materializes as a [`FileResponse`](consign_core::FileResponse);
/// this type only appears when the remote refuses and reports why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Receipts")]
pub struct ReceiptsResponse {
    #[serde(rename = "Error", default)]
    errors: Vec<ServiceError>,
}

impl ApiResponse for ReceiptsResponse {
    fn messages(&self) -> Vec<Message> {
        self.errors.iter().map(ServiceError::to_message).collect()
    }
}

#[cfg(test)]
mod tests {
    use consign_core::from_xml;

    use super::*;

    #[test]
    fn refusal_surfaces_as_messages() {
        let response: ReceiptsResponse = from_xml(
            "<Receipts><Error><Code>ERR_ORDER_NOT_FOUND</Code><Text>unknown dispatch number</Text></Error></Receipts>",
        )
        .expect("deserialize");

        assert!(response.has_errors());
        assert_eq!(response.messages()[0].error_code(), "ERR_ORDER_NOT_FOUND");
    }
}
