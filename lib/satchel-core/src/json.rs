//! JSON body encoder.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;

use crate::{ContentType, FragmentBuilder, MultipartPart, ParametersEncoder, Request, Result};

/// Encodes a serializable value as a JSON request body.
///
/// Also usable as a multipart section, in which case it needs a part name.
///
/// # Example
///
/// ```
/// use satchel_core::{JsonBody, ParametersEncoder, Request};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct NewUser { name: String }
///
/// let params = JsonBody::new(NewUser { name: "Alice".to_string() });
/// let request = params
///     .encode(Request::parse("https://api.example.com/users").expect("url"))
///     .expect("encode");
///
/// assert_eq!(request.header("content-type"), Some("application/json"));
/// assert_eq!(request.body().map(|b| &b[..]), Some(&br#"{"name":"Alice"}"#[..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody<T> {
    value: T,
    multipart_name: Option<String>,
}

impl<T> JsonBody<T> {
    /// Wrap `value`, without a multipart name.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            multipart_name: None,
        }
    }

    /// Wrap `value` with the name used when rendered as a multipart part.
    #[must_use]
    pub fn named(value: T, multipart_name: impl Into<String>) -> Self {
        Self {
            value,
            multipart_name: Some(multipart_name.into()),
        }
    }

    /// The wrapped value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// The multipart part name, if set.
    #[must_use]
    pub fn multipart_name(&self) -> Option<&str> {
        self.multipart_name.as_deref()
    }
}

impl<T> ParametersEncoder for JsonBody<T>
where
    T: Serialize + Send + Sync,
{
    fn encode(&self, mut request: Request) -> Result<Request> {
        let body = crate::to_json(&self.value)?;
        request.set_header(
            CONTENT_TYPE,
            HeaderValue::from_static(ContentType::Json.as_str()),
        );
        request.set_body(body);
        Ok(request)
    }

    fn log_description(&self) -> Option<String> {
        crate::to_json_pretty(&self.value).ok()
    }
}

impl<T> MultipartPart for JsonBody<T>
where
    T: Serialize + Send + Sync,
{
    fn encode_part(&self) -> Result<Bytes> {
        let name = self
            .multipart_name
            .as_deref()
            .ok_or(crate::Error::MultipartNameMissing)?;
        let json = crate::to_json(&self.value)?;

        let mut fragment = FragmentBuilder::with_capacity(json.len() + 96);
        fragment
            .content_disposition(name, None)
            .header("Content-Type", ContentType::Json.as_str())
            .blank_line()
            .payload(&json);
        Ok(fragment.finish())
    }
}
