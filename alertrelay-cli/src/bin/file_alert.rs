// greenapi-file-alert: forwards one Wazuh alert stored on disk, rule id included
//
// Usage: greenapi-file-alert <alertFile> <chatId> <hookUrl>

use alertrelay_cli::{init_logging, parse_args, run, FileArgs};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args::<FileArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let source = args.source();
    run(args.into_relay(), source).await
}
