//! Core types and encoders for satchel.
//!
//! This crate turns typed parameters into a request body and headers:
//! - [`Request`] and [`RequestBuilder`] - outbound request representation
//! - [`ParametersEncoder`] - capability to encode parameters into a request
//! - [`MultipartPart`] - capability to render one multipart section
//! - [`JsonBody`] - JSON body, also usable as a multipart part
//! - [`QueryParameters`] - URL query string
//! - [`ImageParameter`] - raw image body, also usable as a multipart file part
//! - [`MultipartBody`] - `multipart/form-data` body built from parts
//! - [`FragmentBuilder`] - low-level multipart framing
//! - [`BoundaryGenerator`] - source of multipart boundary tokens
//! - [`Error`] and [`Result`] - error handling
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod boundary;
mod encoder;
mod error;
mod fragment;
mod image;
mod json;
mod multipart;
pub mod prelude;
mod query;
mod request;

pub use body::{ContentType, to_json, to_json_pretty};
pub use boundary::{BoundaryGenerator, FixedBoundary, UuidBoundary};
pub use encoder::{MultipartPart, ParametersEncoder};
pub use error::{Error, Result};
pub use fragment::FragmentBuilder;
pub use image::ImageParameter;
pub use json::JsonBody;
pub use multipart::MultipartBody;
pub use query::QueryParameters;
pub use request::{Request, RequestBuilder};

// Re-export http header types
pub use http::header;
