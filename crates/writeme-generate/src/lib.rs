//! README generation: prompt construction, the generation backend client,
//! and the pipeline tying them to project analysis.
//!
//! # Examples
//!
//! ```no_run
//! use writeme_core::{AnalysisConfig, LlmConfig, UploadedFile};
//! use writeme_generate::llm::LlmClient;
//! use writeme_generate::pipeline::{ReadmePipeline, ReadmeRequest};
//!
//! # async fn example() -> Result<(), writeme_core::WritemeError> {
//! let client = LlmClient::new(&LlmConfig::default())?;
//! let pipeline = ReadmePipeline::new(client, AnalysisConfig::default());
//! let uploads = vec![UploadedFile::new("Main.java", b"public class Main {".to_vec())];
//! let readme = pipeline
//!     .generate(ReadmeRequest {
//!         name: "Demo",
//!         description: "A demo project",
//!         uploads: &uploads,
//!     })
//!     .await?;
//! println!("{readme}");
//! # Ok(())
//! # }
//! ```

pub mod llm;
pub mod pipeline;
pub mod prompt;
