//! Core types, configuration, and error handling for writeme.
//!
//! This crate provides the shared foundation used by the other writeme crates:
//! - [`WritemeError`]: unified error type using `thiserror`
//! - [`WritemeConfig`]: configuration loaded from `.writeme.toml`
//! - Request-scoped value types: [`UploadedFile`], [`FileDescriptor`],
//!   [`ProjectDescriptor`], [`Readme`]

mod config;
mod error;
mod types;

pub use config::{AnalysisConfig, LlmConfig, WritemeConfig};
pub use error::WritemeError;
pub use types::{FileDescriptor, ProjectDescriptor, Readme, UploadedFile};
