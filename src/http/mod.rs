//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from specific
//! business logic: response builders, MIME detection, ETag caching, and
//! multipart form parsing.

pub mod cache;
pub mod mime;
pub mod multipart;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_html_response, build_options_response,
};
