//! Quill CLI - chat assistant for the editor shell

use anyhow::Result;
use clap::Parser as _;
use cli::Cli;

mod cli;
mod handlers;
mod interactive;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    handlers::run(cli).await?;

    Ok(())
}
