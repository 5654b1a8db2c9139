//! HTTP method types.

use derive_more::Display;

/// HTTP request method.
///
/// The remote API speaks plain GET and POST; parameter placement
/// (query string vs. form fields) follows from the method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - retrieve a resource.
    #[display("GET")]
    Get,
    /// POST method - submit a request document or form.
    #[display("POST")]
    Post,
}

impl Method {
    /// Returns `true` if the method carries a request body.
    ///
    /// Parameter requests travel as form fields for body-bearing methods
    /// and as query parameters otherwise.
    #[must_use]
    pub const fn carries_body(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
        }
    }
}

impl TryFrom<http::Method> for Method {
    type Error = crate::Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        match method {
            http::Method::GET => Ok(Self::Get),
            http::Method::POST => Ok(Self::Post),
            other => Err(crate::Error::invalid_request(format!(
                "unsupported HTTP method: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn method_carries_body() {
        assert!(Method::Post.carries_body());
        assert!(!Method::Get.carries_body());
    }

    #[test]
    fn method_into_http() {
        assert_eq!(http::Method::from(Method::Get), http::Method::GET);
        assert_eq!(http::Method::from(Method::Post), http::Method::POST);
    }

    #[test]
    fn method_from_http() {
        assert_eq!(
            Method::try_from(http::Method::GET).expect("GET"),
            Method::Get
        );
        assert!(Method::try_from(http::Method::DELETE).is_err());
    }
}
