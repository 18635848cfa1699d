// notify-alert: reads one Wazuh alert from stdin and forwards it to the Green API
//
// Usage: notify-alert <apiUrl> <idInstance> <apiTokenInstance> <chatId> < alert.json

use alertrelay_cli::{init_logging, parse_args, run, StdinArgs};
use alertrelay_core::AlertSource;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args::<StdinArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    run(args.into_relay(), AlertSource::Stdin).await
}
