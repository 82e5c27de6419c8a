//! Contact form delivery. The form only sees the `Submitter` capability;
//! the production implementation POSTs the payload as JSON to an externally
//! owned endpoint and reports a single ok/failed outcome.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// The submitted field values, keyed the way the endpoint expects them.
#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

pub trait Submitter {
    fn submit(&self, payload: &Payload) -> Result<(), SubmitError>;
}

pub struct HttpSubmitter {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpSubmitter {
    pub fn new(endpoint: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, payload: &Payload) -> Result<(), SubmitError> {
        if let Ok(body) = serde_json::to_string(payload) {
            log::debug!("posting {} bytes to {}", body.len(), self.endpoint);
        }
        let response = self.client.post(&self.endpoint).json(payload).send()?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status(response.status()))
        }
    }
}
