//! Pluggable request-body encoders for outbound HTTP requests.
//!
//! Turn typed parameters into a body and headers: JSON bodies, URL query
//! strings, and `multipart/form-data` bodies mixing JSON and binary parts.
//!
//! # Example
//!
//! ```
//! use satchel::prelude::*;
//!
//! #[derive(Serialize)]
//! struct Profile {
//!     name: String,
//! }
//!
//! let chain = EncoderChain::new()
//!     .encoder(QueryParameters::new([("notify", false)]))
//!     .encoder(
//!         MultipartBody::new()
//!             .part(JsonBody::named(Profile { name: "Alice".to_string() }, "profile"))
//!             .part(ImageParameter::named(vec![0xFF_u8, 0xD8], "avatar.jpg", "avatar")),
//!     );
//!
//! let request = chain.encode(Request::parse("https://api.example.com/profile")?)?;
//! assert!(request.body().is_some());
//! # Ok::<(), satchel::Error>(())
//! ```

mod chain;
mod config;
pub mod prelude;

pub use chain::EncoderChain;
pub use config::{EncoderConfig, EncoderConfigBuilder, LogLevel};

// Re-export core types
pub use satchel_core::{
    BoundaryGenerator, ContentType, Error, FixedBoundary, FragmentBuilder, ImageParameter,
    JsonBody, MultipartBody, MultipartPart, ParametersEncoder, QueryParameters, Request,
    RequestBuilder, Result, UuidBoundary, to_json, to_json_pretty,
};

// Re-export http header types
pub use satchel_core::header;

// Re-export crates appearing in the public API
pub use bytes;
pub use url;
