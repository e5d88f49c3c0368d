use writeme_core::{AnalysisConfig, ProjectDescriptor, Readme, UploadedFile, WritemeError};

use crate::llm::TextGenerator;
use crate::prompt;

/// Inputs for one README generation.
///
/// # Examples
///
/// ```
/// use writeme_core::UploadedFile;
/// use writeme_generate::pipeline::ReadmeRequest;
///
/// let uploads = vec![UploadedFile::new("Main.java", b"public class Main {".to_vec())];
/// let request = ReadmeRequest {
///     name: "Demo",
///     description: "A test",
///     uploads: &uploads,
/// };
/// assert_eq!(request.uploads.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReadmeRequest<'a> {
    /// Project name, used verbatim.
    pub name: &'a str,
    /// Project description, used verbatim.
    pub description: &'a str,
    /// Every uploaded file, source or not.
    pub uploads: &'a [UploadedFile],
}

/// Drives analysis, prompt construction, and a single generation call.
pub struct ReadmePipeline<G> {
    generator: G,
    analysis: AnalysisConfig,
}

impl<G: TextGenerator> ReadmePipeline<G> {
    /// Create a pipeline from a generator and analysis config.
    pub fn new(generator: G, analysis: AnalysisConfig) -> Self {
        Self {
            generator,
            analysis,
        }
    }

    /// Analyse the uploads of `request`.
    ///
    /// # Errors
    ///
    /// Returns [`WritemeError::FileRead`] if a source file cannot be decoded.
    pub fn analyze(&self, request: ReadmeRequest<'_>) -> Result<ProjectDescriptor, WritemeError> {
        writeme_analysis::analyze_project(
            request.name,
            request.description,
            request.uploads,
            &self.analysis,
        )
    }

    /// Build the prompt for `request` without calling the generator.
    ///
    /// # Errors
    ///
    /// Same as [`ReadmePipeline::analyze`].
    pub fn prompt(&self, request: ReadmeRequest<'_>) -> Result<String, WritemeError> {
        let project = self.analyze(request)?;
        Ok(prompt::build_prompt(&project))
    }

    /// Generate a README for `request`.
    ///
    /// Calls the generator exactly once, after analysis succeeds. No retries.
    ///
    /// # Errors
    ///
    /// Returns [`WritemeError::FileRead`] if analysis fails (the generator is
    /// not called), or [`WritemeError::GenerationUnavailable`] if the
    /// generator fails.
    pub async fn generate(&self, request: ReadmeRequest<'_>) -> Result<Readme, WritemeError> {
        let prompt = self.prompt(request)?;
        tracing::info!(
            model = self.generator.model(),
            prompt_chars = prompt.len(),
            "requesting README"
        );

        let markdown = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::warn!("README generation failed: {e}");
            match e {
                WritemeError::GenerationUnavailable(_) => e,
                other => WritemeError::GenerationUnavailable(other.to_string()),
            }
        })?;

        Ok(Readme {
            markdown,
            model: self.generator.model().to_string(),
        })
    }
}
