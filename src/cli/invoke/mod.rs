//! Invoke command - handles a single invocation event

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;

use crate::api::handle_event;
use crate::api::types::InvocationResponse;
use crate::config::AppConfig;
use crate::domain::request::INVALID_ACTION_MESSAGE;
use crate::domain::DomainError;
use crate::infrastructure::logging;

/// Arguments for the invoke command
#[derive(Args, Clone, Debug)]
pub struct InvokeArgs {
    /// File holding the JSON event; reads stdin when omitted
    #[arg(long)]
    pub event: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long)]
    pub pretty: bool,
}

/// Handle one event and print the `{statusCode, body}` response to stdout
pub async fn run(args: InvokeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
        to_stderr: true,
    });

    let raw = read_event(&args).await?;
    let state = crate::create_app_state_with_config(&config).await?;

    let response = match serde_json::from_str::<Value>(&raw) {
        Ok(event) => handle_event(&state.registry, &event).await,
        Err(e) => {
            info!(error = %e, "Event is not valid JSON");
            InvocationResponse::from_error(DomainError::invalid_argument(INVALID_ACTION_MESSAGE))
        }
    }
    .context("Invocation failed")?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(())
}

async fn read_event(args: &InvokeArgs) -> anyhow::Result<String> {
    match &args.event {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read event file {}", path.display())),
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read event from stdin")?;
            Ok(raw)
        }
    }
}
