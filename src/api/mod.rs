//! CMS backend access.
//!
//! [`ContentSource`] is the raw transport seam (JSON in, JSON out);
//! [`Cms`] layers envelope normalization and typed endpoints on top of it.

pub mod client;
mod cms;
pub mod envelope;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use client::HttpSource;
pub use cms::{Cms, PageEndpoint, Suggestions};

/// Query string pairs, in order.
pub type Query = Vec<(String, String)>;

/// Transport for backend calls.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// GET `path` relative to the backend base URL and parse the JSON body.
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value>;

    /// POST `body` as JSON to `path` and parse the JSON reply.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value>;
}
