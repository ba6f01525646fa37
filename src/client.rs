//! HTTP submission of captured coordinates

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::api::models::{Acknowledgement, LocationPayload};
use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::types::SubmissionOutcome;

/// Client for the location submission endpoint
#[derive(Debug, Clone)]
pub struct LocationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LocationClient {
    /// Creates a client posting to `endpoint`, giving up after `timeout`
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http(endpoint, http))
    }

    /// Creates a client on top of an existing reqwest client
    pub fn with_http(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `coord` and returns the server's acknowledgement
    ///
    /// Any 2xx status counts as accepted even if the body is not a
    /// well-formed acknowledgement.
    pub async fn submit(&self, coord: Coordinate) -> Result<Acknowledgement> {
        let payload = LocationPayload::from(coord);
        let body = serde_json::to_vec(&payload)
            .map_err(|e| Error::Submission(format!("payload encoding: {}", e)))?;

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Submission(format!("server responded with {}", status)));
        }

        let ack = response.json::<Acknowledgement>().await.unwrap_or_default();
        debug!(ack = %ack.message, "Location acknowledged");
        Ok(ack)
    }

    /// Posts `coord` and folds the result into a [`SubmissionOutcome`]
    pub async fn outcome(&self, coord: Coordinate) -> SubmissionOutcome {
        match self.submit(coord).await {
            Ok(_) => SubmissionOutcome::Sent,
            Err(e) => {
                warn!(endpoint = %self.endpoint, "Error sending location: {}", e);
                SubmissionOutcome::SendFailed(e.to_string())
            }
        }
    }
}
