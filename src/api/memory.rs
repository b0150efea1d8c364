//! In-memory [`ContentSource`] for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::api::ContentSource;
use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Status(u16),
}

/// Canned backend keyed by `path?query`. Unknown keys answer 404.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    posted: Arc<Mutex<Vec<(String, Value)>>>,
}

fn key(path: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{path}?{}", pairs.join("&"))
    }
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: &str, value: Value) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(key.to_string(), Reply::Json(value));
        self
    }

    pub fn with_status(self, key: &str, status: u16) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(key.to_string(), Reply::Status(status));
        self
    }

    /// Bodies received by `post_json`, in order.
    pub fn posted(&self) -> Vec<(String, Value)> {
        self.posted.lock().unwrap().clone()
    }

    fn reply(&self, key: &str) -> Result<Value> {
        match self.replies.lock().unwrap().get(key) {
            Some(Reply::Json(value)) => Ok(value.clone()),
            Some(Reply::Status(status)) => Err(AppError::status(key, *status, "")),
            None => Err(AppError::status(key, 404, "")),
        }
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        self.reply(&key(path, query))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.posted
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));
        self.reply(path)
    }
}
