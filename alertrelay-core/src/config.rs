use crate::delivery::Endpoint;
use crate::error::{RelayError, Result};
use std::fmt;

pub const ENV_API_URL: &str = "GREEN_API_URL";
pub const ENV_INSTANCE_ID: &str = "GREEN_API_INSTANCE_ID";
pub const ENV_API_TOKEN: &str = "GREEN_API_TOKEN";
pub const ENV_CHAT_ID: &str = "GREEN_API_CHAT_ID";

/// Green API account settings. Read once at startup, never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct GreenApiConfig {
    pub api_url: String,
    pub instance_id: String,
    pub api_token: String,
    pub chat_id: String,
}

impl fmt::Debug for GreenApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreenApiConfig")
            .field("api_url", &self.api_url)
            .field("instance_id", &self.instance_id)
            .field("api_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl GreenApiConfig {
    pub fn new(
        api_url: impl Into<String>,
        instance_id: impl Into<String>,
        api_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            api_url: api_url.into(),
            instance_id: instance_id.into(),
            api_token: api_token.into(),
            chat_id: chat_id.into(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).ok_or_else(|| RelayError::Config(format!("{} is not set", key)))
        };

        Self::new(
            require(ENV_API_URL)?,
            require(ENV_INSTANCE_ID)?,
            require(ENV_API_TOKEN)?,
            require(ENV_CHAT_ID)?,
        )
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            (ENV_API_URL, &self.api_url),
            (ENV_INSTANCE_ID, &self.instance_id),
            (ENV_API_TOKEN, &self.api_token),
            (ENV_CHAT_ID, &self.chat_id),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(RelayError::Config(format!("{} must not be empty", name)));
            }
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(RelayError::Config(format!(
                "{} must be an http(s) URL, got '{}'",
                ENV_API_URL, self.api_url
            )));
        }

        Ok(())
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::green_api(&self.api_url, &self.instance_id, &self.api_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_values() {
        let config = GreenApiConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://api.green-api.com"),
            (ENV_INSTANCE_ID, "1101000001"),
            (ENV_API_TOKEN, "secret"),
            (ENV_CHAT_ID, "79001234567@c.us"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.green-api.com");
        assert_eq!(config.instance_id, "1101000001");
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.chat_id, "79001234567@c.us");
        assert_eq!(
            config.endpoint().url(),
            "https://api.green-api.com/waInstance1101000001/sendMessage/secret"
        );
    }

    #[test]
    fn test_missing_variable_is_reported() {
        let err = GreenApiConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://api.green-api.com"),
            (ENV_INSTANCE_ID, "1101000001"),
            (ENV_CHAT_ID, "79001234567@c.us"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(ENV_API_TOKEN));
    }

    #[test]
    fn test_empty_value_is_rejected() {
        let err = GreenApiConfig::new("https://api.green-api.com", " ", "t", "c").unwrap_err();
        assert!(err.to_string().contains(ENV_INSTANCE_ID));
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        assert!(GreenApiConfig::new("api.green-api.com", "1", "t", "c").is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = GreenApiConfig::new("https://api.green-api.com", "1", "topsecret", "c").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("topsecret"));
        assert!(debug.contains("<redacted>"));
    }
}
