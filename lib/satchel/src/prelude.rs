//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use satchel::prelude::*;
//! ```

pub use crate::{
    ContentType, EncoderChain, EncoderConfig, Error, ImageParameter, JsonBody, LogLevel,
    MultipartBody, MultipartPart, ParametersEncoder, QueryParameters, Request, RequestBuilder,
    Result, header, to_json,
};
pub use serde::Serialize;
