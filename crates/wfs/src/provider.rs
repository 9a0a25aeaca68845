//! # Provider
//!
//! Provider defines external data interfaces for the crate.

use anyhow::Result;
use bytes::Bytes;
use http::{Request, Response};

/// The `HttpFetch` trait defines the behavior for fetching data from the
/// upstream service.
pub trait HttpFetch: Send + Sync {
    /// Make outbound HTTP request.
    fn fetch(&self, request: Request<()>) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

/// The `Config` trait is used by implementers to provide runtime
/// configuration to dependent crates.
pub trait Config: Send + Sync {
    /// Request configuration setting.
    fn get(&self, key: &str) -> impl Future<Output = Result<String>> + Send;
}
