// src/api/client.rs

//! HTTP transport to the CMS backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

use crate::api::ContentSource;
use crate::error::{AppError, Result};
use crate::models::ApiConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ApiConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// [`ContentSource`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` below the base URL, keeping the base path prefix.
    pub fn endpoint_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url,
            path.trim_start_matches('/')
        ))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn read_json(endpoint: &str, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::status(endpoint, status.as_u16(), body));
        }

        if let Some(found) = content_type.filter(|ct| !ct.contains("json")) {
            return Err(AppError::ContentType {
                endpoint: endpoint.to_string(),
                found,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|_| AppError::InvalidJson {
            endpoint: endpoint.to_string(),
            body,
        })
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.endpoint_url(path, query)?;
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        Self::read_json(path, response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.endpoint_url(path, &[])?;
        log::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        Self::read_json(path, response).await
    }
}
