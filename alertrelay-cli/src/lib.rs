// Shared plumbing for the notify-alert and greenapi-file-alert binaries

use alertrelay_core::{
    AlertRelay, AlertSource, DeliveryClient, Endpoint, MessageStyle, GreenApiConfig,
};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::error::Error as StdError;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

/// Relay a single Wazuh alert read from standard input to the Green API.
#[derive(Parser, Debug)]
#[command(name = "notify-alert")]
#[command(version, long_about = None)]
pub struct StdinArgs {
    /// Green API base URL, e.g. https://api.green-api.com
    #[arg(env = "GREEN_API_URL")]
    pub api_url: String,

    /// Green API instance id
    #[arg(env = "GREEN_API_INSTANCE_ID")]
    pub id_instance: String,

    /// Green API instance token
    #[arg(env = "GREEN_API_TOKEN", hide_env_values = true)]
    pub api_token_instance: String,

    /// Destination chat id
    #[arg(env = "GREEN_API_CHAT_ID")]
    pub chat_id: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "ALERTRELAY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl StdinArgs {
    pub fn into_relay(self) -> Result<AlertRelay> {
        let config = GreenApiConfig::new(
            self.api_url,
            self.id_instance,
            self.api_token_instance,
            self.chat_id,
        )
        .context("invalid Green API arguments")?;
        let client = build_client(self.timeout_secs)?;
        Ok(AlertRelay::from_config(client, &config))
    }
}

/// Relay a single Wazuh alert stored in a file to a Green API hook URL,
/// including the rule id in the message.
#[derive(Parser, Debug)]
#[command(name = "greenapi-file-alert")]
#[command(version, long_about = None)]
pub struct FileArgs {
    /// Path of the alert JSON file
    pub alert_file: PathBuf,

    /// Destination chat id
    pub chat_id: String,

    /// Full sendMessage URL to POST to
    pub hook_url: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "ALERTRELAY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl FileArgs {
    pub fn source(&self) -> AlertSource {
        AlertSource::File(self.alert_file.clone())
    }

    pub fn into_relay(self) -> Result<AlertRelay> {
        let client = build_client(self.timeout_secs)?;
        Ok(AlertRelay::new(client, Endpoint::hook(self.hook_url), self.chat_id)
            .with_style(MessageStyle::WithRuleId))
    }
}

fn build_client(timeout_secs: Option<u64>) -> Result<DeliveryClient> {
    DeliveryClient::with_timeout(timeout_secs.map(Duration::from_secs))
        .context("failed to create HTTP client")
}

/// Parse process arguments. Usage errors exit with status 1 like every
/// other failure; `--help` and `--version` still exit through clap.
pub fn parse_args<T: Parser>() -> std::result::Result<T, ExitCode> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<T, I, S>(args: I) -> std::result::Result<T, ExitCode>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(parsed) => Ok(parsed),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                Err(ExitCode::FAILURE)
            }
        },
    }
}

/// Log to stderr so stdout stays free for callers that capture it.
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alertrelay_cli=info".parse()?)
                .add_directive("alertrelay_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Relay one alert and map the outcome to the process exit status.
pub async fn run(relay: Result<AlertRelay>, source: AlertSource) -> ExitCode {
    let relay = match relay {
        Ok(relay) => relay,
        Err(e) => {
            let err: &(dyn StdError + 'static) = e.as_ref();
            report_error("invalid configuration", err);
            return ExitCode::FAILURE;
        }
    };

    info!("Relaying alert from {:?} to {}", source, relay.endpoint().redacted_url());
    match relay.relay_from(&source).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_parse_error() => {
            report_error("failed to decode alert", &e);
            ExitCode::FAILURE
        }
        Err(e) => {
            report_error("failed to send alert", &e);
            ExitCode::FAILURE
        }
    }
}

fn report_error(context: &str, err: &(dyn StdError + 'static)) {
    error!("{}: {}", context, err);
    eprintln!("Error: {}: {}", context, err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_args_positional() {
        let args = StdinArgs::try_parse_from([
            "notify-alert",
            "https://api.green-api.com",
            "1101000001",
            "token",
            "79001234567@c.us",
        ])
        .unwrap();
        assert_eq!(args.api_url, "https://api.green-api.com");
        assert_eq!(args.id_instance, "1101000001");
        assert_eq!(args.api_token_instance, "token");
        assert_eq!(args.chat_id, "79001234567@c.us");
        assert_eq!(args.timeout_secs, None);

        let relay = args.into_relay().unwrap();
        assert_eq!(
            relay.endpoint().url(),
            "https://api.green-api.com/waInstance1101000001/sendMessage/token"
        );
    }

    #[test]
    fn test_file_args_positional() {
        let args = FileArgs::try_parse_from([
            "greenapi-file-alert",
            "/var/ossec/alert.json",
            "chat@c.us",
            "https://hooks.example.com/send",
            "--timeout-secs",
            "10",
        ])
        .unwrap();
        assert_eq!(args.alert_file, PathBuf::from("/var/ossec/alert.json"));
        assert_eq!(args.chat_id, "chat@c.us");
        assert_eq!(args.hook_url, "https://hooks.example.com/send");
        assert_eq!(args.timeout_secs, Some(10));
        assert_eq!(
            args.source(),
            AlertSource::File(PathBuf::from("/var/ossec/alert.json"))
        );
    }

    #[test]
    fn test_file_args_require_all_positionals() {
        assert!(FileArgs::try_parse_from(["greenapi-file-alert", "/tmp/a.json"]).is_err());
    }

    #[test]
    fn test_usage_error_maps_to_failure() {
        assert!(parse_args_from::<StdinArgs, _, _>(["notify-alert", "https://api.green-api.com"]).is_err());
        assert!(parse_args_from::<FileArgs, _, _>(["greenapi-file-alert"]).is_err());
        assert!(parse_args_from::<FileArgs, _, _>(["greenapi-file-alert", "a.json", "c", "http://h", "--bogus"]).is_err());
    }

    #[test]
    fn test_parse_args_from_accepts_valid_arguments() {
        let args = parse_args_from::<FileArgs, _, _>(["greenapi-file-alert", "a.json", "c", "http://h"])
            .unwrap_or_else(|_| panic!("valid arguments rejected"));
        assert_eq!(args.alert_file, PathBuf::from("a.json"));
    }

    #[test]
    fn test_invalid_api_url_is_rejected() {
        let args = StdinArgs::try_parse_from(["notify-alert", "not-a-url", "1", "t", "c"]).unwrap();
        assert!(args.into_relay().is_err());
    }
}
