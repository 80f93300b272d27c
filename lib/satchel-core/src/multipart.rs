//! Multipart form data encoder.
//!
//! [`MultipartBody`] stitches an ordered list of [`MultipartPart`]s into one
//! `multipart/form-data` body.
//!
//! # Example
//!
//! ```
//! use satchel_core::{ImageParameter, JsonBody, MultipartBody, ParametersEncoder, Request};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Profile { name: String }
//!
//! let body = MultipartBody::new()
//!     .part(JsonBody::named(Profile { name: "Alice".to_string() }, "profile"))
//!     .part(ImageParameter::named(vec![0xFF_u8, 0xD8], "avatar.jpg", "avatar"));
//!
//! let request = body
//!     .encode(Request::parse("https://api.example.com/profile").expect("url"))
//!     .expect("encode");
//!
//! let content_type = request.header("content-type").expect("content type");
//! assert!(content_type.starts_with("multipart/form-data; boundary="));
//! ```

use std::fmt;
use std::sync::Arc;

use http::header::{CONTENT_TYPE, HeaderValue};

use crate::{
    BoundaryGenerator, ContentType, FragmentBuilder, MultipartPart, ParametersEncoder, Request,
    Result, UuidBoundary,
};

/// Composite encoder producing a `multipart/form-data` body.
///
/// Parts are written in insertion order. A fresh boundary is drawn from the
/// [`BoundaryGenerator`] on every [`encode`](ParametersEncoder::encode) call.
///
/// By default no closing `--<boundary>--` line is written; use
/// [`terminated`](Self::terminated) for strict multipart consumers.
pub struct MultipartBody {
    parts: Vec<Box<dyn MultipartPart>>,
    boundary: Arc<dyn BoundaryGenerator>,
    terminated: bool,
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MultipartBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipartBody")
            .field("parts", &self.parts.len())
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}

impl MultipartBody {
    /// Create an empty multipart body using random UUID boundaries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            boundary: Arc::new(UuidBoundary),
            terminated: false,
        }
    }

    /// Create a multipart body from already boxed parts.
    #[must_use]
    pub fn with_parts(parts: Vec<Box<dyn MultipartPart>>) -> Self {
        Self {
            parts,
            ..Self::new()
        }
    }

    /// Add a part after the existing ones.
    #[must_use]
    pub fn part(mut self, part: impl MultipartPart + 'static) -> Self {
        self.parts.push(Box::new(part));
        self
    }

    /// Use `generator` for boundary tokens.
    #[must_use]
    pub fn boundary_generator(mut self, generator: impl BoundaryGenerator + 'static) -> Self {
        self.boundary = Arc::new(generator);
        self
    }

    /// Append the closing `--<boundary>--` line after the last part.
    #[must_use]
    pub const fn terminated(mut self, terminated: bool) -> Self {
        self.terminated = terminated;
        self
    }

    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if there are no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl ParametersEncoder for MultipartBody {
    fn encode(&self, mut request: Request) -> Result<Request> {
        let boundary = self.boundary.generate();
        let content_type = HeaderValue::try_from(ContentType::multipart_form_data(&boundary))?;

        // Nothing touches the request until every part rendered
        let mut body = FragmentBuilder::new();
        for part in &self.parts {
            let section = part.encode_part()?;
            body.delimiter(&boundary).payload(&section).crlf();
        }
        if self.terminated {
            body.closing_delimiter(&boundary);
        }

        request.set_header(CONTENT_TYPE, content_type);
        request.set_body(body.finish());
        Ok(request)
    }
}
