use clap::Parser;
use storage_registry::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Invoke(args) => cli::invoke::run(args).await,
    }
}
