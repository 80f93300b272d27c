//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use satchel_core::prelude::*;
//! ```

pub use crate::{
    ContentType, Error, ImageParameter, JsonBody, MultipartBody, MultipartPart,
    ParametersEncoder, QueryParameters, Request, RequestBuilder, Result, to_json,
};
