//! Request signing.
//!
//! The remote API authenticates signed operations with a date-bound token:
//! the MD5 digest of `YYYY-MM-DD&<secure key>`, rendered as lowercase hex.
//! The token is derived here; attaching it to a request is the request
//! kind's own [`Authorize`](crate::Authorize) capability.

use chrono::NaiveDate;

use crate::{Authorize, Result};

/// Compute the date-bound signature token for a secure key.
///
/// Pure and deterministic; malformed inputs simply produce a token the
/// remote will reject.
#[must_use]
pub fn secure_token(secure: &str, date: NaiveDate) -> String {
    let digest = md5::compute(format!("{}&{secure}", date.format("%Y-%m-%d")));
    format!("{digest:x}")
}

/// Authorization material for one dispatch: the account, its secure key,
/// and the reference date the token is bound to.
#[derive(Debug, Clone)]
pub struct Auth<'a> {
    account: &'a str,
    secure: &'a str,
    date: NaiveDate,
}

impl<'a> Auth<'a> {
    /// Creates authorization material for the given reference date.
    #[must_use]
    pub const fn new(account: &'a str, secure: &'a str, date: NaiveDate) -> Self {
        Self {
            account,
            secure,
            date,
        }
    }

    /// The reference date the token is bound to.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The signature token for this date and secure key.
    #[must_use]
    pub fn token(&self) -> String {
        secure_token(self.secure, self.date)
    }

    /// Apply the [`Authorize`] capability: attach the date, then the
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the request rejects the credentials.
    pub fn apply<R: Authorize>(&self, request: R) -> Result<R> {
        request.date(self.date).credentials(self.account, &self.token())
    }
}
