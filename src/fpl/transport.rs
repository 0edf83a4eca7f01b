use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::{ClientConfig, RetryPolicy};
use crate::error::{DebriefError, Result};

/// Something that can answer a GET for a path under the FPL API root.
///
/// `path` always starts with `/`, e.g. `/entry/42/history/`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value>;
}

/// Lets several owners share one transport (and its connection pool).
#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, path: &str) -> Result<Value> {
        (**self).get(path).await
    }
}

/// Single-attempt transport over [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(DebriefError::ClientBuild)?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Use an already configured [`reqwest::Client`] (proxies, custom TLS, ...).
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).send().await.map_err(|source| {
            if source.is_timeout() {
                DebriefError::Timeout { url: url.clone() }
            } else {
                DebriefError::Network {
                    url: url.clone(),
                    source: Box::new(source),
                }
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| {
            if source.is_timeout() {
                DebriefError::Timeout { url: url.clone() }
            } else {
                DebriefError::Network {
                    url: url.clone(),
                    source: Box::new(source),
                }
            }
        })?;

        if !status.is_success() {
            return Err(DebriefError::Upstream {
                url,
                status: status.as_u16(),
                body,
            });
        }

        debug!(%url, bytes = body.len(), "received response");
        serde_json::from_str(&body).map_err(|source| DebriefError::Decode { url, source })
    }
}

/// Wraps another transport and repeats failed calls with exponential backoff.
///
/// Every error is retried, upstream 4xx included; the last error is returned
/// once the policy's attempts are used up.
pub struct RetryingTransport<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: Transport> RetryingTransport<T> {
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl<T: Transport> Transport for RetryingTransport<T> {
    async fn get(&self, path: &str) -> Result<Value> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.inner.get(path).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt >= attempts => return Err(err),
                Err(err) => {
                    let delay = self.policy.delay_for(attempt);
                    warn!(
                        path,
                        attempt,
                        remaining = attempts - attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
