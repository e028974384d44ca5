use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use log::debug;

use super::state::SpendingSnapshot;
use crate::errors::FetchError;

/// Anything the poller can pull a snapshot from.
pub trait SpendingSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<SpendingSnapshot, FetchError>> + Send;
}

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: spending_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_spending(&self) -> Result<SpendingSnapshot, FetchError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.bytes().await.map_err(FetchError::Transport)?;
        debug!("GET {} -> {} ({} bytes)", self.endpoint, status, body.len());
        decode_snapshot(&body)
    }
}

impl SpendingSource for Client {
    async fn fetch(&self) -> Result<SpendingSnapshot, FetchError> {
        self.fetch_spending().await
    }
}

pub fn spending_endpoint(base_url: &str) -> String {
    format!("{}/visualization/spending", base_url.trim_end_matches('/'))
}

/// An empty or `null` body is absent data, not a decode failure.
pub fn decode_snapshot(body: &[u8]) -> Result<SpendingSnapshot, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::NoData);
    }
    let parsed: Option<SpendingSnapshot> = serde_json::from_slice(body)?;
    parsed.ok_or(FetchError::NoData)
}
