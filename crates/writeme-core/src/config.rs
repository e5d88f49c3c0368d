use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WritemeError;

/// Top-level configuration loaded from `.writeme.toml`.
///
/// Supports layered resolution: CLI flags > env vars > local config > defaults.
///
/// # Examples
///
/// ```
/// use writeme_core::WritemeConfig;
///
/// let config = WritemeConfig::default();
/// assert_eq!(config.analysis.source_suffix, ".java");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WritemeConfig {
    /// Generation backend settings.
    #[serde(default)]
    pub llm: LlmConfig,
    /// Project analysis settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl WritemeConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`WritemeError::FileNotFound`] if the file does not exist,
    /// [`WritemeError::Io`] if it cannot be read, or [`WritemeError::Toml`]
    /// if the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use writeme_core::WritemeConfig;
    /// use std::path::Path;
    ///
    /// let config = WritemeConfig::from_file(Path::new(".writeme.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, WritemeError> {
        if !path.exists() {
            return Err(WritemeError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`WritemeError::Toml`] if parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use writeme_core::WritemeConfig;
    ///
    /// let toml = r#"
    /// [analysis]
    /// source_suffix = ".kt"
    /// "#;
    /// let config = WritemeConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.analysis.source_suffix, ".kt");
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, WritemeError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// Generation backend configuration.
///
/// Any OpenAI-compatible chat completions endpoint works; `provider` only
/// selects which environment variable holds the API key.
///
/// # Examples
///
/// ```
/// use writeme_core::LlmConfig;
///
/// let config = LlmConfig::default();
/// assert_eq!(config.model, "gpt-4o");
/// assert_eq!(config.api_key_env_var(), "OPENAI_API_KEY");
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name (e.g. `"openai"`, `"anthropic"`, `"ollama"`).
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// API key for the provider.
    pub api_key: Option<String>,
    /// Custom base URL for API requests.
    pub base_url: Option<String>,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "openai".into()
}

fn default_model() -> String {
    "gpt-4o".into()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    120
}

impl LlmConfig {
    /// Name of the environment variable that holds the key for `provider`.
    pub fn api_key_env_var(&self) -> &'static str {
        match self.provider.as_str() {
            "anthropic" => "ANTHROPIC_API_KEY",
            "gemini" => "GEMINI_API_KEY",
            _ => "OPENAI_API_KEY",
        }
    }

    /// The configured API key, falling back to the provider's env var.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(self.api_key_env_var()).ok())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key: None,
            base_url: None,
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Project analysis configuration.
///
/// # Examples
///
/// ```
/// use writeme_core::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert!(config.is_source_file("src/Main.java"));
/// assert!(!config.is_source_file("README.md"));
/// assert_eq!(config.max_file_size, 1_048_576);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Filename suffix of files whose classes and methods are extracted
    /// (default: `".java"`).
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,
    /// Glob patterns excluded when collecting files from disk.
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    /// Files larger than this many bytes are not collected (default: 1 MB).
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_source_suffix() -> String {
    ".java".into()
}

fn default_max_file_size() -> u64 {
    1_048_576
}

impl AnalysisConfig {
    /// Whether `path` is analysed for classes and methods.
    pub fn is_source_file(&self, path: &str) -> bool {
        path.ends_with(&self.source_suffix)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            source_suffix: default_source_suffix(),
            skip_patterns: Vec::new(),
            max_file_size: default_max_file_size(),
        }
    }
}
