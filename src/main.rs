use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use b12_submit::config::Config;
use b12_submit::error::SubmitError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Init tracing on stderr; stdout is reserved for the receipt
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let result = match config {
        Ok(config) => b12_submit::run(&config).await,
        Err(e) => Err(SubmitError::from(e)),
    };

    match result {
        Ok(receipt) => {
            println!("{receipt}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Submission failed: {e:?}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
