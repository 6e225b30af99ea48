//! HTTP client for the blog's post API
//!
//! Sends one `POST /api/posts` per publish. No retries: a failure is reported
//! once and the user decides whether to submit again.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::publish_form::PublishRequest;
use crate::error::DoniaiError;

const POSTS_PATH: &str = "/api/posts";

/// Server reply to a publish request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublishResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Errors that can occur while publishing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// Request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not `{success, message}`
    #[error("Malformed response (HTTP {status}): {message}")]
    MalformedResponse { status: u16, message: String },

    /// Request was cancelled
    #[error("Publish cancelled")]
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct PublishClient {
    client: Client,
    endpoint: String,
}

impl PublishClient {
    /// Client for the server at `base_url`, e.g. `http://localhost:8080`
    pub fn new(base_url: &str) -> Result<Self, DoniaiError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(DoniaiError::InvalidServerUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::new(),
            endpoint: format!("{}{}", base_url, POSTS_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the request, racing it against `cancel_token`
    ///
    /// The body is parsed as `{success, message}` whatever the HTTP status,
    /// since the server reports validation failures that way too.
    pub async fn publish(
        &self,
        request: &PublishRequest,
        cancel_token: &CancellationToken,
    ) -> Result<PublishResponse, PublishError> {
        if cancel_token.is_cancelled() {
            return Err(PublishError::Cancelled);
        }

        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => {
                log::debug!("Publish to {} cancelled", self.endpoint);
                Err(PublishError::Cancelled)
            }
            result = self.send(request) => result,
        }
    }

    async fn send(&self, request: &PublishRequest) -> Result<PublishResponse, PublishError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        log::debug!("Publish response HTTP {}: {} bytes", status, body.len());

        serde_json::from_str::<PublishResponse>(&body).map_err(|e| {
            PublishError::MalformedResponse {
                status,
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
#[path = "publish_client_tests.rs"]
mod publish_client_tests;
