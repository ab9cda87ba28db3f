//! One-shot track-query client: build, sign, post, parse.

use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::error::TrackError;
use crate::models::TrackResult;
use crate::parse::parse_track_response;
use crate::request::{DataType, SignedRequest};
use crate::transport::{HttpTransport, Transport};

pub struct TrackClient {
    config: Config,
    transport: Box<dyn Transport>,
}

impl TrackClient {
    pub fn new(config: Config) -> Result<Self, TrackError> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;

        Ok(Self {
            config,
            transport: Box::new(transport),
        })
    }

    /// Swap the HTTP layer; used by tests to stay off the network.
    pub fn with_transport(config: Config, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Queries the trace list for one waybill (JSON mode).
    ///
    /// `Ok(None)` means the vendor returned nothing usable for this waybill.
    /// Blank inputs fail with [`TrackError::Validation`] before any network
    /// call; transport failures surface as [`TrackError::Network`] or
    /// [`TrackError::Status`]. No retries are performed.
    pub async fn query_traces(
        &self,
        carrier_code: &str,
        tracking_number: &str,
    ) -> Result<Option<TrackResult>, TrackError> {
        info!(carrier_code, tracking_number, "querying traces");

        let request = SignedRequest::build(
            carrier_code,
            tracking_number,
            &self.config.business_id,
            &self.config.app_key,
            DataType::Json,
        )?;

        let body = self
            .transport
            .post(&self.config.api_url, request.form_body())
            .await?;

        let result = parse_track_response(&body);
        if result.is_none() {
            info!(carrier_code, tracking_number, "no trace information returned");
        }

        Ok(result)
    }

    /// Queries in the vendor's XML protocol mode (`DataType` = 1) and returns
    /// the raw response body unmapped.
    pub async fn query_traces_xml(
        &self,
        carrier_code: &str,
        tracking_number: &str,
    ) -> Result<String, TrackError> {
        let request = SignedRequest::build(
            carrier_code,
            tracking_number,
            &self.config.business_id,
            &self.config.app_key,
            DataType::Xml,
        )?;

        self.transport
            .post(&self.config.api_url, request.form_body())
            .await
    }
}
