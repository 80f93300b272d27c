//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type of the bodies and parts produced by the encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// JPEG image content type (`image/jpeg`).
    ImageJpeg,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::ImageJpeg => "image/jpeg",
        }
    }

    /// `Content-Type` value announcing a multipart body framed by `boundary`.
    #[must_use]
    pub fn multipart_form_data(boundary: &str) -> String {
        format!("multipart/form-data; boundary={boundary}")
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to compact JSON bytes, as sent on the wire.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use satchel_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { name: String }
///
/// let user = User { name: "Alice".to_string() };
/// let bytes = to_json(&user).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"Alice"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Serialize a value to indented JSON text, for diagnostics.
///
/// This is computed separately from [`to_json`]; nothing produced here is
/// ever sent.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_json_pretty<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn content_type_as_str() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(ContentType::ImageJpeg.as_str(), "image/jpeg");
    }

    #[test]
    fn content_type_display() {
        assert_eq!(ContentType::Json.to_string(), "application/json");
    }

    #[test]
    fn content_type_multipart() {
        assert_eq!(
            ContentType::multipart_form_data("abc"),
            "multipart/form-data; boundary=abc"
        );
    }

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct User {
            name: String,
            age: u32,
        }

        let user = User {
            name: "Alice".to_string(),
            age: 30,
        };

        let bytes = to_json(&user).expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"name":"Alice","age":30}"#);
    }

    #[test]
    fn to_json_pretty_is_indented() {
        #[derive(serde::Serialize)]
        struct Payload {
            test: &'static str,
        }

        let text = to_json_pretty(&Payload { test: "test" }).expect("serialize");
        assert_eq!(text, "{\n  \"test\": \"test\"\n}");
    }

    #[test]
    fn to_json_non_string_keys_fail() {
        let mut map = HashMap::new();
        map.insert(vec![1_u8], "value");

        let err = to_json(&map).expect_err("should fail");
        assert!(err.is_serialization());
        assert!(to_json_pretty(&map).is_err());
    }
}
