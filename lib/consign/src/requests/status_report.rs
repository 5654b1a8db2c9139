//! Delivery status registry request.

use chrono::NaiveDate;
use serde::Serialize;

use consign_core::signature::Auth;
use consign_core::{ApiRequest, Authorize, Error, Method, Payload, Result, to_xml};

use crate::responses::StatusReportResponse;

/// Request the delivery status registry for the account's orders.
///
/// Signed XML POST. Without an explicit period the remote reports the
/// current day.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "StatusReport", rename_all = "PascalCase")]
pub struct StatusReportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secure: Option<String>,
    show_history: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_first: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_last: Option<NaiveDate>,
}

impl StatusReportRequest {
    /// Report for the current day.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for an inclusive date window.
    #[must_use]
    pub fn with_period(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            date_first: Some(first),
            date_last: Some(last),
            ..Self::default()
        }
    }

    /// Include the full status history of every order.
    #[must_use]
    pub const fn show_history(mut self) -> Self {
        self.show_history = 1;
        self
    }
}

impl ApiRequest for StatusReportRequest {
    type Response = StatusReportResponse;

    const NAME: &'static str = "status_report";

    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> &str {
        "/status_report_h.php"
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::document(to_xml(self)?))
    }

    fn sign(self, auth: &Auth<'_>) -> Result<Self> {
        auth.apply(self)
    }
}

impl Authorize for StatusReportRequest {
    fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    fn credentials(mut self, account: &str, token: &str) -> Result<Self> {
        if account.is_empty() {
            return Err(Error::authentication("account identifier is empty"));
        }
        self.account = Some(account.to_string());
        self.secure = Some(token.to_string());
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn serializes_as_status_report_document() {
        let request = StatusReportRequest::with_period(date(2018, 4, 1), date(2018, 4, 6));
        let xml = to_xml(&request).expect("serialize");

        assert!(xml.contains("<StatusReport"), "got: {xml}");
        assert!(xml.contains("<DateFirst>2018-04-01</DateFirst>"), "got: {xml}");
        assert!(xml.contains("<DateLast>2018-04-06</DateLast>"), "got: {xml}");
    }

    #[test]
    fn unsigned_request_omits_credentials() {
        let request = StatusReportRequest::new();
        let xml = to_xml(&request).expect("serialize");

        assert!(!xml.contains("<Account>"), "got: {xml}");
        assert!(!xml.contains("<Secure>"), "got: {xml}");
    }

    #[test]
    fn signing_attaches_date_and_credentials() {
        let auth = Auth::new("account", "secret", date(2016, 10, 31));
        let request = StatusReportRequest::new().sign(&auth).expect("signed");
        let xml = to_xml(&request).expect("serialize");

        assert!(xml.contains("<Date>2016-10-31</Date>"), "got: {xml}");
        assert!(xml.contains("<Account>account</Account>"), "got: {xml}");
        assert!(xml.contains("<Secure>"), "got: {xml}");
    }

    #[test]
    fn empty_account_is_rejected() {
        let auth = Auth::new("", "secret", date(2016, 10, 31));
        let result = StatusReportRequest::new().sign(&auth);
        assert!(matches!(result, Err(Error::Authentication(_))));
    }
}
