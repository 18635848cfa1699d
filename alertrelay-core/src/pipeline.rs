use crate::alert::parse_alert;
use crate::config::GreenApiConfig;
use crate::delivery::{DeliveryClient, Endpoint, OutboundMessage};
use crate::error::{RelayError, Result};
use crate::message::{render_message, MessageStyle};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

/// Where a CLI reads its single alert from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertSource {
    Stdin,
    File(PathBuf),
}

impl AlertSource {
    pub async fn read(&self) -> Result<Vec<u8>> {
        match self {
            AlertSource::Stdin => {
                let mut buf = Vec::new();
                tokio::io::stdin()
                    .read_to_end(&mut buf)
                    .await
                    .map_err(RelayError::stdin)?;
                Ok(buf)
            }
            AlertSource::File(path) => tokio::fs::read(path)
                .await
                .map_err(|e| RelayError::io(path.clone(), e)),
        }
    }
}

/// Parse, format and deliver. Shared by every entry point.
#[derive(Debug, Clone)]
pub struct AlertRelay {
    client: DeliveryClient,
    endpoint: Endpoint,
    chat_id: String,
    style: MessageStyle,
}

impl AlertRelay {
    pub fn new(client: DeliveryClient, endpoint: Endpoint, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            endpoint,
            chat_id: chat_id.into(),
            style: MessageStyle::Standard,
        }
    }

    pub fn from_config(client: DeliveryClient, config: &GreenApiConfig) -> Self {
        Self::new(client, config.endpoint(), config.chat_id.clone())
    }

    pub fn with_style(mut self, style: MessageStyle) -> Self {
        self.style = style;
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Relay one raw alert document. Returns the text that was delivered.
    pub async fn relay(&self, raw: &[u8]) -> Result<String> {
        let alert = parse_alert(raw)?;
        let message = render_message(&alert, self.style)?;
        let payload = OutboundMessage::new(self.chat_id.clone(), message);

        self.client.send(&self.endpoint, &payload).await?;
        info!(
            "Relayed level {} alert from agent '{}'",
            alert.rule.level, alert.agent.name
        );
        Ok(payload.message)
    }

    pub async fn relay_from(&self, source: &AlertSource) -> Result<String> {
        let raw = source.read().await?;
        self.relay(&raw).await
    }
}
