//! Outbound request representation.
//!
//! A [`Request`] is the value every encoder receives and returns: an optional
//! target URL, a header map, and an optional body. Encoders never hold on to
//! it; they take it by value and hand back the modified version.
//!
//! # Example
//!
//! ```
//! use satchel_core::{Request, header};
//! use bytes::Bytes;
//!
//! let request = Request::builder("https://api.example.com".parse().unwrap())
//!     .header(header::ACCEPT, header::HeaderValue::from_static("application/json"))
//!     .body(Bytes::from_static(b"{}"))
//!     .build();
//!
//! assert_eq!(request.header("accept"), Some("application/json"));
//! ```

use bytes::Bytes;
use http::header::{AsHeaderName, HeaderMap, HeaderName, HeaderValue, IntoHeaderName};
use url::Url;

/// An outbound HTTP request: URL, headers, and optional body.
///
/// Header names are case-insensitive and setting a header replaces any
/// previous value for that name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    url: Option<Url>,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl Request {
    /// Creates a request targeting `url`, with no headers and no body.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url: Some(url),
            ..Self::default()
        }
    }

    /// Creates a request with no URL.
    #[must_use]
    pub fn without_url() -> Self {
        Self::default()
    }

    /// Parses `url` and creates a request targeting it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUrl`] if `url` cannot be parsed.
    pub fn parse(url: &str) -> crate::Result<Self> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(url: Url) -> RequestBuilder {
        RequestBuilder::new(url)
    }

    /// Request URL, if any.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Replaces the request URL.
    pub fn set_url(&mut self, url: Url) {
        self.url = Some(url);
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Single header value by name, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: impl AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Sets a header, replacing every previous value for that name.
    pub fn set_header(&mut self, name: impl IntoHeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Replaces the request body.
    pub fn set_body(&mut self, body: impl Into<Bytes>) {
        self.body = Some(body.into());
    }

    /// Consume into (url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Option<Url>, HeaderMap, Option<Bytes>) {
        (self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            request: Request::new(url),
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request.set_header(name, value);
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (HeaderName, HeaderValue)>) -> Self {
        for (name, value) in headers {
            self.request.set_header(name, value);
        }
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.request.set_body(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        self.request
    }
}
