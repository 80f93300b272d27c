//! Binary fragment builder for multipart payloads.
//!
//! Every multipart section is framed the same way:
//!
//! ```text
//! --<boundary>\r\n
//! Content-Disposition: form-data; name="<name>"\r\n
//! Content-Type: <mime>\r\n
//! \r\n
//! <payload>\r\n
//! ```
//!
//! [`FragmentBuilder`] writes those pieces into a single buffer. Payloads are
//! copied verbatim, so binary data survives untouched.

use bytes::{BufMut, Bytes, BytesMut};

const CRLF: &[u8] = b"\r\n";
const DASHES: &[u8] = b"--";

/// Accumulates multipart framing and payload bytes.
#[derive(Debug, Clone, Default)]
pub struct FragmentBuilder {
    buf: BytesMut,
}

impl FragmentBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Append a delimiter line: `--<boundary>\r\n`.
    pub fn delimiter(&mut self, boundary: &str) -> &mut Self {
        self.buf.put_slice(DASHES);
        self.buf.put_slice(boundary.as_bytes());
        self.buf.put_slice(CRLF);
        self
    }

    /// Append the closing delimiter line: `--<boundary>--\r\n`.
    pub fn closing_delimiter(&mut self, boundary: &str) -> &mut Self {
        self.buf.put_slice(DASHES);
        self.buf.put_slice(boundary.as_bytes());
        self.buf.put_slice(DASHES);
        self.buf.put_slice(CRLF);
        self
    }

    /// Append a header line: `<name>: <value>\r\n`.
    pub fn header(&mut self, name: &str, value: &str) -> &mut Self {
        self.buf.put_slice(name.as_bytes());
        self.buf.put_slice(b": ");
        self.buf.put_slice(value.as_bytes());
        self.buf.put_slice(CRLF);
        self
    }

    /// Append a `Content-Disposition: form-data` header line.
    pub fn content_disposition(&mut self, name: &str, filename: Option<&str>) -> &mut Self {
        self.buf.put_slice(b"Content-Disposition: form-data; name=\"");
        self.buf.put_slice(name.as_bytes());
        self.buf.put_u8(b'"');
        if let Some(filename) = filename {
            self.buf.put_slice(b"; filename=\"");
            self.buf.put_slice(filename.as_bytes());
            self.buf.put_u8(b'"');
        }
        self.buf.put_slice(CRLF);
        self
    }

    /// Append the empty line that ends a header block.
    pub fn blank_line(&mut self) -> &mut Self {
        self.crlf()
    }

    /// Append raw payload bytes.
    pub fn payload(&mut self, data: &[u8]) -> &mut Self {
        self.buf.put_slice(data);
        self
    }

    /// Append a bare `\r\n`.
    pub fn crlf(&mut self) -> &mut Self {
        self.buf.put_slice(CRLF);
        self
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing was written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Freeze the accumulated bytes.
    #[must_use]
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder() {
        let builder = FragmentBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.len(), 0);
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn delimiters() {
        let mut builder = FragmentBuilder::new();
        builder.delimiter("abc").closing_delimiter("abc");
        assert_eq!(builder.finish().as_ref(), b"--abc\r\n--abc--\r\n");
    }

    #[test]
    fn header_block() {
        let mut builder = FragmentBuilder::with_capacity(64);
        builder
            .content_disposition("json", None)
            .header("Content-Type", "application/json")
            .blank_line()
            .payload(b"{}");

        assert_eq!(
            builder.finish().as_ref(),
            b"Content-Disposition: form-data; name=\"json\"\r\nContent-Type: application/json\r\n\r\n{}"
        );
    }

    #[test]
    fn content_disposition_with_filename() {
        let mut builder = FragmentBuilder::new();
        builder.content_disposition("image", Some("test.png"));
        assert_eq!(
            builder.finish().as_ref(),
            b"Content-Disposition: form-data; name=\"image\"; filename=\"test.png\"\r\n"
        );
    }

    #[test]
    fn binary_payload_is_verbatim() {
        let data = [0x00, 0xFF, b'\r', b'\n', 0xD8];
        let mut builder = FragmentBuilder::new();
        builder.payload(&data).crlf();

        assert_eq!(builder.len(), data.len() + 2);
        assert_eq!(builder.finish().as_ref(), b"\x00\xFF\r\n\xD8\r\n");
    }
}
