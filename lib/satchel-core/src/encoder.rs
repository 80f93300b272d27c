//! Encoder capabilities.
//!
//! - [`ParametersEncoder`] - attaches a body and headers to a [`Request`]
//! - [`MultipartPart`] - renders one section of a multipart payload
//!
//! The two are independent: a type may implement either or both. The JSON
//! and image encoders implement both; the query encoder is request-only and
//! the multipart composite consumes parts to act as a request encoder.

use std::sync::Arc;

use bytes::Bytes;

use crate::{Request, Result};

/// Capability to augment an outbound request with encoded parameters.
pub trait ParametersEncoder: Send + Sync {
    /// Encode the parameters into `request` and return the new request.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot be encoded; the request is
    /// not returned in that case.
    fn encode(&self, request: Request) -> Result<Request>;

    /// Human-readable description of the parameters, for logging.
    ///
    /// Never fails: `None` means no description is available.
    fn log_description(&self) -> Option<String> {
        None
    }
}

/// Capability to render a single multipart section.
///
/// The returned bytes hold the section's header lines, the blank line, and
/// the payload. Delimiters are added by the composite.
pub trait MultipartPart: Send + Sync {
    /// Render this part.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MultipartNameMissing`] if the part has no name.
    fn encode_part(&self) -> Result<Bytes>;
}

impl<E: ParametersEncoder + ?Sized> ParametersEncoder for &E {
    fn encode(&self, request: Request) -> Result<Request> {
        (**self).encode(request)
    }

    fn log_description(&self) -> Option<String> {
        (**self).log_description()
    }
}

impl<E: ParametersEncoder + ?Sized> ParametersEncoder for Box<E> {
    fn encode(&self, request: Request) -> Result<Request> {
        (**self).encode(request)
    }

    fn log_description(&self) -> Option<String> {
        (**self).log_description()
    }
}

impl<E: ParametersEncoder + ?Sized> ParametersEncoder for Arc<E> {
    fn encode(&self, request: Request) -> Result<Request> {
        (**self).encode(request)
    }

    fn log_description(&self) -> Option<String> {
        (**self).log_description()
    }
}

impl<P: MultipartPart + ?Sized> MultipartPart for &P {
    fn encode_part(&self) -> Result<Bytes> {
        (**self).encode_part()
    }
}

impl<P: MultipartPart + ?Sized> MultipartPart for Box<P> {
    fn encode_part(&self) -> Result<Bytes> {
        (**self).encode_part()
    }
}

impl<P: MultipartPart + ?Sized> MultipartPart for Arc<P> {
    fn encode_part(&self) -> Result<Bytes> {
        (**self).encode_part()
    }
}
