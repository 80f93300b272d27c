//! Error types for satchel.

use derive_more::{Display, Error, From};

/// Main error type for parameter encoding.
///
/// Only [`Error::MultipartNameMissing`] originates in the encoders themselves;
/// the other variants are failures passed through unchanged from the URL,
/// header, or JSON layers.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// A multipart part has no name to put in its `Content-Disposition` header.
    #[display("multipart name missing")]
    #[from(skip)]
    MultipartNameMissing,

    /// The request carries no URL to attach query parameters to.
    #[display("bad URL: request has no URL")]
    #[from(skip)]
    MissingUrl,

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// A generated value cannot be used as an HTTP header value.
    #[display("invalid header value: {_0}")]
    #[from]
    InvalidHeaderValue(http::header::InvalidHeaderValue),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if a multipart part was missing its name.
    #[must_use]
    pub const fn is_multipart_name_missing(&self) -> bool {
        matches!(self, Self::MultipartNameMissing)
    }

    /// Returns `true` for the bad-URL condition (absent or unparsable URL).
    #[must_use]
    pub const fn is_bad_url(&self) -> bool {
        matches!(self, Self::MissingUrl | Self::InvalidUrl(_))
    }

    /// Returns `true` if the JSON codec rejected the value.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::JsonSerialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            Error::MultipartNameMissing.to_string(),
            "multipart name missing"
        );
        assert_eq!(Error::MissingUrl.to_string(), "bad URL: request has no URL");

        let err = Error::from(url::Url::parse("not a url").expect_err("should fail"));
        assert!(err.to_string().starts_with("invalid URL: "));
    }

    #[test]
    fn error_predicates() {
        assert!(Error::MultipartNameMissing.is_multipart_name_missing());
        assert!(!Error::MissingUrl.is_multipart_name_missing());

        assert!(Error::MissingUrl.is_bad_url());
        let parse = url::Url::parse("::").expect_err("should fail");
        assert!(Error::InvalidUrl(parse).is_bad_url());
        assert!(!Error::MultipartNameMissing.is_bad_url());
    }

    #[test]
    fn error_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("\"nope\"").expect_err("should fail");
        let err = Error::from(json_err);
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("JSON serialization error: "));
    }

    #[test]
    fn error_from_header_value() {
        let header_err = http::HeaderValue::from_str("bad\nvalue").expect_err("should fail");
        let err = Error::from(header_err);
        assert!(matches!(err, Error::InvalidHeaderValue(_)));
    }
}
