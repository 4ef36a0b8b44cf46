// src/transport/http.rs

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::protocol::{
    self, HEALTH_PATH, HUMANISE_PATH, HealthStatus, HumaniseReply, HumaniseRequest,
};
use crate::transport::Transport;
use reqwest::blocking::{Client, Response};
use tracing::debug;

/// Talks to the service over HTTP with a blocking reqwest client.
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))?;

        Ok(Self { client, config })
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.config.timeout_ms())
        } else {
            TransportError::Network(err.to_string())
        }
    }

    /// Reads the whole body and turns a non-2xx status into an error.
    fn read(&self, response: Response) -> Result<String, TransportError> {
        let status = response.status();
        let body = response.text().map_err(|err| self.classify(err))?;

        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                server_message: protocol::error_message(&body),
            });
        }
        Ok(body)
    }
}

impl Transport for HttpTransport {
    fn humanise(&self, request: &HumaniseRequest) -> Result<HumaniseReply, TransportError> {
        let url = self.config.endpoint(HUMANISE_PATH);
        debug!(%url, "POST humanise");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|err| self.classify(err))?;

        let body = self.read(response)?;
        let reply = HumaniseReply::from_body(&body);
        debug!(
            original_chars = reply.original.as_deref().map(|s| s.chars().count()),
            echoed = reply.original.as_deref() == Some(request.text.as_str()),
            "humanise reply decoded"
        );
        Ok(reply)
    }

    fn health(&self) -> Result<HealthStatus, TransportError> {
        let url = self.config.endpoint(HEALTH_PATH);
        debug!(%url, "GET health");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| self.classify(err))?;

        let body = self.read(response)?;
        serde_json::from_str::<HealthStatus>(&body)
            .map_err(|err| TransportError::Decode(format!("Failed to parse JSON: {err}")))
    }
}
