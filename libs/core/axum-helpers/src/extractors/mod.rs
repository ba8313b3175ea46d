//! Extractors that reject with the shared [`ErrorResponse`](crate::errors::ErrorResponse) body.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
