//! CLI module for the storage unit registry
//!
//! Provides subcommands for running the registry in different modes:
//! - `serve`: HTTP server exposing `/invoke` and the REST endpoints
//! - `invoke`: handle a single invocation event and print the response

pub mod invoke;
pub mod serve;

use clap::{Parser, Subcommand};

/// Storage unit registry - status tracking over a single JSON document
#[derive(Parser)]
#[command(name = "storage-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Handle one invocation event read from a file or stdin
    Invoke(invoke::InvokeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["storage-registry", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_invoke_with_event_file() {
        let cli =
            Cli::try_parse_from(["storage-registry", "invoke", "--event", "event.json"]).unwrap();

        match cli.command {
            Command::Invoke(args) => {
                assert_eq!(args.event.as_deref(), Some(std::path::Path::new("event.json")));
            }
            Command::Serve => panic!("expected invoke"),
        }
    }
}
