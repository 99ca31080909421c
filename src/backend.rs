use crate::errors::SyncError;
use crate::models::{CounterResponse, ErrorResponse, Operation};
use reqwest::{header::CONTENT_TYPE, Client, Response};
use std::future::Future;
use tracing::debug;

pub const COUNTER_PATH: &str = "/counter";

/// Remote source of truth for the counter.
pub trait CounterBackend: Send + Sync {
    /// True iff a read of the current value answers with a success status.
    fn probe(&self) -> impl Future<Output = bool> + Send;

    fn fetch(&self) -> impl Future<Output = Result<i64, SyncError>> + Send;

    fn apply(&self, op: Operation) -> impl Future<Output = Result<i64, SyncError>> + Send;
}

/// JSON-over-HTTP client for `GET /counter` and `POST /counter/{increment,decrement}`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CounterBackend for HttpBackend {
    async fn probe(&self) -> bool {
        match self.client.get(self.url(COUNTER_PATH)).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("probe failed: {err}");
                false
            }
        }
    }

    async fn fetch(&self) -> Result<i64, SyncError> {
        debug!("GET {COUNTER_PATH}");
        let response = self.client.get(self.url(COUNTER_PATH)).send().await?;
        read_value(response).await
    }

    async fn apply(&self, op: Operation) -> Result<i64, SyncError> {
        debug!("POST {}", op.path());
        let response = self
            .client
            .post(self.url(op.path()))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        read_value(response).await
    }
}

async fn read_value(response: Response) -> Result<i64, SyncError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        let body: CounterResponse = serde_json::from_slice(&bytes).map_err(SyncError::network)?;
        return Ok(body.value);
    }

    let message = match serde_json::from_slice::<ErrorResponse>(&bytes) {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(SyncError::backend(status.as_u16(), message))
}
