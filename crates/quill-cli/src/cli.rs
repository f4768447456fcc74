//! Command-line arguments for the Quill CLI.

use std::path::PathBuf;

use clap::Parser;

/// Interactive AI coding assistant for the editor shell.
#[derive(Debug, Parser)]
#[command(name = "quill", version, about)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// File to load into the editor buffer; also seeds the language context
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Project type hint passed to the prompt builder (for example `cargo`)
    #[arg(long)]
    pub project_type: Option<String>,

    /// Override the configured model name
    #[arg(long)]
    pub model: Option<String>,
}
