//! HTTP seam between the client and the vendor endpoint.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::time::Duration;

use crate::error::TrackError;

/// Posts a pre-encoded form body and returns the raw response body.
///
/// The body's values are already percent-encoded by the request builder, so
/// implementations must send it verbatim rather than re-encoding it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, body: String) -> Result<String, TrackError>;
}

/// Production transport backed by reqwest with a bounded timeout.
pub struct HttpTransport {
    http_client: HttpClient,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TrackError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: String) -> Result<String, TrackError> {
        let response = self
            .http_client
            .post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TrackError::Status { status, body });
        }

        Ok(response.text().await?)
    }
}
