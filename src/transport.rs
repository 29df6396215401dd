//! The transport collaborator boundary: something that can execute a built
//! query against the provider and hand back the opaque JSON payload.
//!
//! Retry policy, authentication, and caching live behind this trait, not in
//! this crate.

use crate::query::QueryDescriptor;
use serde_json::Value;
use std::future::Future;
use thiserror::Error;

/// An opaque transport failure, surfaced to the caller unmodified.
#[derive(Debug, Error)]
#[error("transport request failed for {url}")]
pub struct TransportError {
    url: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
        }
    }

    /// The URL whose request failed.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Executes one built query and returns the provider's JSON payload.
pub trait DataTransport {
    fn fetch(
        &self,
        query: &QueryDescriptor,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

/// The default transport: a plain HTTP GET against the provider prefix.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    provider_prefix: String,
}

impl HttpTransport {
    /// Creates a transport issuing requests under `provider_prefix`
    /// (trailing slash tolerated).
    pub fn new(client: reqwest::Client, provider_prefix: impl Into<String>) -> Self {
        let provider_prefix = provider_prefix.into().trim_end_matches('/').to_string();
        Self {
            client,
            provider_prefix,
        }
    }

    fn url_for(&self, query: &QueryDescriptor) -> String {
        format!("{}{}", self.provider_prefix, query.path())
    }
}

impl DataTransport for HttpTransport {
    async fn fetch(&self, query: &QueryDescriptor) -> Result<Value, TransportError> {
        let url = self.url_for(query);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| TransportError::new(&url, e))?;
        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::new(&url, e))
    }
}
