use crate::error::{RelayError, Result};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Chat message payload accepted by the Green API `sendMessage` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub chat_id: String,
    pub message: String,
}

impl OutboundMessage {
    pub fn new(chat_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message: message.into(),
        }
    }
}

/// Where a message is POSTed.
#[derive(Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `<base_url>/waInstance<instance_id>/sendMessage/<api_token>`
    GreenApi {
        base_url: String,
        instance_id: String,
        api_token: String,
    },
    /// A complete URL, used verbatim.
    Hook(String),
}

impl Endpoint {
    pub fn green_api(
        base_url: impl Into<String>,
        instance_id: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self::GreenApi {
            base_url: base_url.into(),
            instance_id: instance_id.into(),
            api_token: api_token.into(),
        }
    }

    pub fn hook(url: impl Into<String>) -> Self {
        Self::Hook(url.into())
    }

    pub fn url(&self) -> String {
        match self {
            Self::GreenApi {
                base_url,
                instance_id,
                api_token,
            } => format!(
                "{}/waInstance{}/sendMessage/{}",
                base_url, instance_id, api_token
            ),
            Self::Hook(url) => url.clone(),
        }
    }

    /// URL safe to log: the API token is masked.
    pub fn redacted_url(&self) -> String {
        match self {
            Self::GreenApi {
                base_url,
                instance_id,
                ..
            } => format!("{}/waInstance{}/sendMessage/***", base_url, instance_id),
            // Green API hook URLs carry the token after sendMessage/
            Self::Hook(url) => match url.split_once("/sendMessage/") {
                Some((prefix, _)) => format!("{}/sendMessage/***", prefix),
                None => url.clone(),
            },
        }
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Endpoint").field(&self.redacted_url()).finish()
    }
}

/// Single-attempt HTTP client for the messaging API. No retries.
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    client: Client,
}

impl DeliveryClient {
    /// Client with the transport's default timeout behaviour.
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// POST the message and succeed only on HTTP 200.
    pub async fn send(&self, endpoint: &Endpoint, message: &OutboundMessage) -> Result<()> {
        debug!(
            "Sending message to {} for chat {}",
            endpoint.redacted_url(),
            message.chat_id
        );

        let response = self
            .client
            .post(endpoint.url())
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Delivery rejected with status {}", status.as_u16());
            return Err(RelayError::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            "Alert sent successfully with response code {}",
            status.as_u16()
        );
        Ok(())
    }
}
