//! Image (binary) encoder.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};

use crate::{ContentType, FragmentBuilder, MultipartPart, ParametersEncoder, Request, Result};

/// Encodes raw image bytes, either as the whole request body or as a named
/// file part of a multipart body.
///
/// The content type is always `image/jpeg`. The bytes are not inspected, so
/// sending another format under that label is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageParameter {
    image: Bytes,
    filename: String,
    multipart_name: Option<String>,
}

impl ImageParameter {
    /// Wrap `image` with its `filename`, without a multipart name.
    #[must_use]
    pub fn new(image: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            filename: filename.into(),
            multipart_name: None,
        }
    }

    /// Wrap `image` with its `filename` and the multipart part name.
    #[must_use]
    pub fn named(
        image: impl Into<Bytes>,
        filename: impl Into<String>,
        multipart_name: impl Into<String>,
    ) -> Self {
        Self {
            multipart_name: Some(multipart_name.into()),
            ..Self::new(image, filename)
        }
    }

    /// The image bytes.
    #[must_use]
    pub const fn image(&self) -> &Bytes {
        &self.image
    }

    /// The file name sent in the part's `Content-Disposition`.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The multipart part name, if set.
    #[must_use]
    pub fn multipart_name(&self) -> Option<&str> {
        self.multipart_name.as_deref()
    }
}

impl ParametersEncoder for ImageParameter {
    /// Overwrites both the body and the `Content-Type` of the request.
    fn encode(&self, mut request: Request) -> Result<Request> {
        request.set_header(
            CONTENT_TYPE,
            HeaderValue::from_static(ContentType::ImageJpeg.as_str()),
        );
        request.set_body(self.image.clone());
        Ok(request)
    }

    fn log_description(&self) -> Option<String> {
        Some(format!("<image: {} bytes>", self.image.len()))
    }
}

impl MultipartPart for ImageParameter {
    fn encode_part(&self) -> Result<Bytes> {
        let name = self
            .multipart_name
            .as_deref()
            .ok_or(crate::Error::MultipartNameMissing)?;

        let mut fragment = FragmentBuilder::with_capacity(self.image.len() + 128);
        fragment
            .content_disposition(name, Some(self.filename.as_str()))
            .header("Content-Type", ContentType::ImageJpeg.as_str())
            .blank_line()
            .payload(&self.image);
        Ok(fragment.finish())
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::Error;

    const JPEG_MAGIC: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

    #[test]
    fn encode_sets_jpeg_body() {
        let input = Request::parse("http://test.com/upload").expect("valid URL");
        let output = ImageParameter::new(JPEG_MAGIC.to_vec(), "photo.jpg")
            .encode(input)
            .expect("encode");

        check!(output.header(CONTENT_TYPE) == Some("image/jpeg"));
        check!(output.body().map(|b| &b[..]) == Some(&JPEG_MAGIC[..]));
    }

    #[test]
    fn encode_overwrites_previous_body() {
        let mut input = Request::parse("http://test.com/upload").expect("valid URL");
        input.set_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        input.set_body("{}");

        let output = ImageParameter::new("png bytes", "test.png")
            .encode(input)
            .expect("encode");

        // Content type stays image/jpeg whatever the file actually is
        check!(output.header(CONTENT_TYPE) == Some("image/jpeg"));
        check!(output.body().map(|b| &b[..]) == Some(&b"png bytes"[..]));
    }

    #[test]
    fn log_description_hides_content() {
        let params = ImageParameter::new("This is image", "test.png");
        check!(params.log_description() == Some("<image: 13 bytes>".to_string()));
    }

    #[test]
    fn part_without_name_fails() {
        let result = ImageParameter::new("This is image", "test.png").encode_part();
        let_assert!(Err(Error::MultipartNameMissing) = result);
    }

    #[test]
    fn part_with_name() {
        let part = ImageParameter::named(JPEG_MAGIC.to_vec(), "test.png", "image")
            .encode_part()
            .expect("part");

        let mut expected = b"Content-Disposition: form-data; name=\"image\"; filename=\"test.png\"\r\nContent-Type: image/jpeg\r\n\r\n".to_vec();
        expected.extend_from_slice(&JPEG_MAGIC);
        check!(part.as_ref() == expected.as_slice());
    }

    #[test]
    fn accessors() {
        let params = ImageParameter::named("abc", "a.jpg", "avatar");
        check!(params.image().as_ref() == b"abc");
        check!(params.filename() == "a.jpg");
        check!(params.multipart_name() == Some("avatar"));
    }
}
