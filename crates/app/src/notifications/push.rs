//! Push gateway.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::warn;
use zeroize::Zeroizing;

use crate::notifications::Notification;

/// Default cloud messaging send endpoint.
pub const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

/// Most tokens the gateway accepts in one send.
pub const FCM_BATCH_SIZE: usize = 1000;

/// Gateway errors that mark a token as permanently undeliverable.
const STALE_TOKEN_ERRORS: [&str; 2] = ["NotRegistered", "InvalidRegistration"];

#[derive(Debug, Clone)]
pub struct FcmConfig {
    pub server_key: Zeroizing<String>,
    pub endpoint: String,
}

#[derive(Debug, Error)]
pub enum PushError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from push gateway: {0}")]
    UnexpectedResponse(String),
}

/// Per-token delivery results of one send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOutcome {
    pub delivered: usize,
    pub failed: usize,

    /// Tokens the gateway no longer recognises.
    pub stale: Vec<String>,
}

impl PushOutcome {
    fn from_results(tokens: &[String], results: Vec<FcmResult>) -> Self {
        let mut outcome = Self::default();

        for (token, result) in tokens.iter().zip(results) {
            match result.error {
                None => outcome.delivered += 1,
                Some(error) => {
                    outcome.failed += 1;

                    if STALE_TOKEN_ERRORS.contains(&error.as_str()) {
                        outcome.stale.push(token.clone());
                    }
                }
            }
        }

        outcome
    }

    fn absorb(&mut self, other: Self) {
        self.delivered += other.delivered;
        self.failed += other.failed;
        self.stale.extend(other.stale);
    }
}

#[derive(Debug, Deserialize)]
struct FcmResponse {
    #[serde(default)]
    results: Vec<FcmResult>,
}

#[derive(Debug, Deserialize)]
struct FcmResult {
    #[serde(default)]
    error: Option<String>,
}

/// Cloud messaging client using the server-key HTTP API.
#[derive(Debug, Clone)]
pub struct FcmGateway {
    config: FcmConfig,
    http: Client,
}

impl FcmGateway {
    #[must_use]
    pub fn new(config: FcmConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn send_batch(
        &self,
        tokens: &[String],
        notification: &Notification,
    ) -> Result<PushOutcome, PushError> {
        let body = json!({
            "registration_ids": tokens,
            "notification": {
                "title": notification.subject,
                "body": notification.body,
            },
            "priority": "high",
        });

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Authorization", format!("key={}", self.config.server_key.as_str()))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PushError::UnexpectedResponse(format!(
                "send failed with status {status}: {text}"
            )));
        }

        let parsed: FcmResponse = response.json().await?;

        Ok(PushOutcome::from_results(tokens, parsed.results))
    }
}

#[async_trait]
impl PushGateway for FcmGateway {
    /// Tokens go out in batches of [`FCM_BATCH_SIZE`]. A failed batch counts its tokens as
    /// failed; the error is only returned when nothing was delivered.
    async fn send(
        &self,
        tokens: &[String],
        notification: &Notification,
    ) -> Result<PushOutcome, PushError> {
        let mut outcome = PushOutcome::default();
        let mut last_error = None;

        for batch in tokens.chunks(FCM_BATCH_SIZE) {
            match self.send_batch(batch, notification).await {
                Ok(sent) => outcome.absorb(sent),
                Err(error) => {
                    warn!(%error, tokens = batch.len(), "push batch failed");

                    outcome.failed += batch.len();
                    last_error = Some(error);
                }
            }
        }

        match last_error {
            Some(error) if outcome.delivered == 0 => Err(error),
            _ => Ok(outcome),
        }
    }
}

#[automock]
#[async_trait]
pub trait PushGateway: Send + Sync {
    /// Send one notification to every token.
    async fn send(
        &self,
        tokens: &[String],
        notification: &Notification,
    ) -> Result<PushOutcome, PushError>;
}
