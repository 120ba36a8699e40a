//! Request handler module
//!
//! Responsible for request routing dispatch: page serving, static assets,
//! and handing /api/ paths to the API module.

pub mod pages;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
