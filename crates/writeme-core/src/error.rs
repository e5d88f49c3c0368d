use std::path::PathBuf;

/// Errors that can occur while analysing a project or generating its README.
///
/// Library crates return this type directly; the binary converts to
/// `miette::Report` at the boundary.
///
/// # Examples
///
/// ```
/// use writeme_core::WritemeError;
///
/// let err = WritemeError::GenerationUnavailable("timed out".into());
/// assert!(err.to_string().contains("timed out"));
/// ```
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum WritemeError {
    /// The generation backend failed; no document was produced.
    #[error("README generation unavailable: {0}")]
    #[diagnostic(
        code(writeme::generation_unavailable),
        help("check the [llm] section of .writeme.toml and your API key")
    )]
    GenerationUnavailable(String),

    /// An uploaded file could not be read or decoded. Aborts the whole request.
    #[error("failed to read {path}: {reason}")]
    #[diagnostic(code(writeme::file_read))]
    FileRead {
        /// Upload path as it appears in the project.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// LLM API or response error.
    #[error("LLM error: {0}")]
    Llm(String),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A required file was not found.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
}
