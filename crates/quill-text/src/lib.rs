//! Pure text and path utilities consumed by the editor shell.
//!
//! These are stateless oracle functions: path validation, filename
//! sanitization, extension-to-language mapping, and small content
//! transformations. The assistant pipeline uses them to seed request
//! context from the focused file.

/// Supported content transformations for [`process_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOp {
    /// Strip leading and trailing whitespace.
    Trim,
    /// Uppercase the whole text.
    Uppercase,
    /// Lowercase the whole text.
    Lowercase,
    /// Count lines, returned as decimal text.
    CountLines,
    /// Count whitespace-separated words, returned as decimal text.
    CountWords,
}

/// Checks that a path is non-empty, relative, and free of parent traversal.
pub fn validate_path(path: &str) -> bool {
    !path.is_empty() && !path.contains("..") && !path.starts_with('/')
}

/// Returns the lowercased extension of a filename, or empty when none.
pub fn file_extension(filename: &str) -> String {
    filename
        .rfind('.')
        .map_or_else(String::new, |dot| filename[dot + 1..].to_lowercase())
}

/// Whether the file is one of the editable text formats the shell opens.
pub fn is_text_file(filename: &str) -> bool {
    let ext = file_extension(filename);
    matches!(
        ext.as_str(),
        "txt" | "js"
            | "ts"
            | "html"
            | "css"
            | "json"
            | "md"
            | "rs"
            | "py"
            | "java"
            | "cpp"
            | "c"
            | "xml"
            | "yml"
            | "yaml"
    )
}

/// Replaces every character outside `[A-Za-z0-9._-]` with an underscore.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '.' || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Maps a path to the editor language tag for its extension.
///
/// Unknown extensions map to `plaintext`.
pub fn language_from_path(path: &str) -> &'static str {
    let filename = path.rsplit('/').next().unwrap_or(path);
    match file_extension(filename).as_str() {
        "js" => "javascript",
        "ts" => "typescript",
        "html" => "html",
        "css" => "css",
        "py" => "python",
        "rs" => "rust",
        "cpp" | "cc" | "cxx" => "cpp",
        "c" => "c",
        "java" => "java",
        "php" => "php",
        "rb" => "ruby",
        "go" => "go",
        "sql" => "sql",
        "xml" => "xml",
        "json" => "json",
        "md" => "markdown",
        "sh" | "bash" => "shell",
        "yml" | "yaml" => "yaml",
        _ => "plaintext",
    }
}

/// Renders a byte count with binary units, one decimal above bytes.
pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    if size < 1024 {
        return format!("{size} B");
    }

    let mut value = size as f64;
    let mut unit_index = 0;
    while value >= 1024.0 && unit_index < UNITS.len() - 1 {
        value /= 1024.0;
        unit_index += 1;
    }

    format!("{value:.1} {}", UNITS[unit_index])
}

/// Applies a content transformation and returns the resulting text.
pub fn process_content(content: &str, op: ContentOp) -> String {
    match op {
        ContentOp::Trim => content.trim().to_owned(),
        ContentOp::Uppercase => content.to_uppercase(),
        ContentOp::Lowercase => content.to_lowercase(),
        ContentOp::CountLines => content.lines().count().to_string(),
        ContentOp::CountWords => content.split_whitespace().count().to_string(),
    }
}
