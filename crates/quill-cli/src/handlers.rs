//! Session setup for the interactive chat command.

use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use quill_assistant::{Assistant, Buffer, ChatSession, EditorSurface as _};
use quill_core::{Config, RequestContext};
use quill_providers::XaiProvider;
use tokio::fs as async_fs;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use crate::cli::Cli;
use crate::interactive::run_chat;

/// Get the Quill folder path, respecting the `QUILL_FOLDER` environment
/// variable. Defaults to `<project>/.quill`.
pub fn get_quill_folder(project_root: &Path) -> PathBuf {
    env::var("QUILL_FOLDER").map_or_else(|_| project_root.join(".quill"), PathBuf::from)
}

/// Runs the interactive chat session.
///
/// # Errors
/// Returns an error if logging setup or terminal I/O fails.
pub async fn run(cli: Cli) -> Result<()> {
    // The REPL owns stdout, so tracing goes to a file.
    let quill_dir = get_quill_folder(&cli.project);
    async_fs::create_dir_all(&quill_dir).await?;

    let debug_log = quill_dir.join("debug.log");
    if async_fs::try_exists(&debug_log).await.unwrap_or(false) {
        async_fs::remove_file(&debug_log).await?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&debug_log)?;

    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "quill_assistant=info,quill_providers=info,quill_core=info".into()
        }))
        .with(
            fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .init();

    // Load or create the configuration at ~/.quill/config.toml.
    let mut config = Config::load_or_create().unwrap_or_else(|error| {
        tracing::warn!("failed to load config from ~/.quill/config.toml: {error}");
        tracing::warn!("using default configuration");
        Config::default()
    });

    if let Some(model) = cli.model {
        config.model.name = model;
    }

    // A missing key is a supported state: the session degrades to canned
    // fallback replies instead of failing.
    let assistant = match XaiProvider::from_config(&config) {
        Ok(provider) => Assistant::new(Arc::new(provider)),
        Err(error) => {
            tracing::warn!(%error, "no completion provider configured");
            Assistant::without_provider()
        }
    };

    let (buffer, context) = load_editor_state(cli.file.as_deref(), cli.project_type).await;
    let session = ChatSession::new(assistant);

    run_chat(session, buffer, context).await
}

/// Loads the focused file into the editor buffer and seeds request context
/// from its path.
async fn load_editor_state(
    file: Option<&Path>,
    project_type: Option<String>,
) -> (Buffer, RequestContext) {
    let mut buffer = Buffer::new();
    let mut context = RequestContext::new();
    context.project_type = project_type;

    let Some(path) = file else {
        return (buffer, context);
    };

    let display_path = path.display().to_string();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    if !quill_text::is_text_file(&display_path) {
        tracing::warn!(file = %display_path, "not a recognized text file, starting empty");
        return (buffer, context);
    }

    let language = quill_text::language_from_path(&display_path);
    match async_fs::read_to_string(path).await {
        Ok(content) => {
            buffer.set_value(&content);
            buffer.update_language(language);
        }
        Err(error) => {
            tracing::warn!(file = %display_path, %error, "failed to read file, starting empty");
        }
    }

    context.language = Some(language.to_owned());
    context.file_name = file_name;

    (buffer, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quill_folder_defaults_under_project() {
        // Only valid when the env override is unset, which is the default
        // in test runs.
        if env::var("QUILL_FOLDER").is_err() {
            let folder = get_quill_folder(Path::new("/tmp/project"));
            assert_eq!(folder, PathBuf::from("/tmp/project/.quill"));
        }
    }

    #[tokio::test]
    async fn load_editor_state_without_file_is_empty() {
        let (buffer, context) = load_editor_state(None, Some("cargo".to_owned())).await;
        assert_eq!(buffer.get_value(), "");
        assert_eq!(context.project_type.as_deref(), Some("cargo"));
        assert!(context.language.is_none());
    }

    #[tokio::test]
    async fn load_editor_state_reads_text_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("snippet.rs");
        std::fs::write(&path, "fn main() {}").expect("Failed to write file");

        let (buffer, context) = load_editor_state(Some(&path), None).await;
        assert_eq!(buffer.get_value(), "fn main() {}");
        assert_eq!(buffer.language(), "rust");
        assert_eq!(context.language.as_deref(), Some("rust"));
        assert_eq!(context.file_name.as_deref(), Some("snippet.rs"));
    }

    #[tokio::test]
    async fn load_editor_state_skips_binary_extension() {
        let (buffer, context) = load_editor_state(Some(Path::new("image.png")), None).await;
        assert_eq!(buffer.get_value(), "");
        assert!(context.language.is_none());
    }
}
