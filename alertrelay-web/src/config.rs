use alertrelay_core::GreenApiConfig;
use anyhow::Context;
use std::env;

pub const DEFAULT_PORT: u16 = 8083;

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
    pub request_timeout_secs: Option<u64>,
    pub green_api: GreenApiConfig,
}

impl WebConfig {
    pub fn new(green_api: GreenApiConfig) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_size: 2 * 1024 * 1024, // 2MB
            request_timeout_secs: None,
            green_api,
        }
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn load_from<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let green_api = GreenApiConfig::from_lookup(&lookup)
            .context("Green API settings are incomplete")?;
        let mut config = Self::new(green_api);

        if let Some(port) = lookup("ALERTRELAY_PORT").or_else(|| lookup("PORT")) {
            config.port = port
                .parse()
                .with_context(|| format!("invalid port '{}'", port))?;
        }

        if let Some(host) = lookup("ALERTRELAY_HOST") {
            config.host = host;
        }

        if let Some(max_size) = lookup("ALERTRELAY_MAX_BODY_SIZE") {
            config.max_body_size = max_size
                .parse()
                .with_context(|| format!("invalid body size '{}'", max_size))?;
        }

        if let Some(timeout) = lookup("ALERTRELAY_TIMEOUT_SECS") {
            config.request_timeout_secs = Some(
                timeout
                    .parse()
                    .with_context(|| format!("invalid timeout '{}'", timeout))?,
            );
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
