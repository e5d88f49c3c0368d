//! Project analysis: turns a bag of uploaded files into a [`ProjectDescriptor`].
//!
//! Renders an ASCII tree of every upload path and pulls public class and
//! method names out of source files with line-oriented heuristics. No
//! grammar is parsed; the output is a hint for a text generator, not an index.

pub mod metadata;
pub mod structure;
pub mod uploads;

use writeme_core::{AnalysisConfig, FileDescriptor, ProjectDescriptor, UploadedFile, WritemeError};

/// Analyse `uploads` into an immutable [`ProjectDescriptor`].
///
/// Every named upload appears in the structure rendering. Only uploads whose
/// path ends with `config.source_suffix` are decoded and scanned; they keep
/// their upload order in [`ProjectDescriptor::files`].
///
/// # Errors
///
/// Returns [`WritemeError::FileRead`] if a source file is not valid UTF-8.
/// One bad file fails the whole analysis.
///
/// # Examples
///
/// ```
/// use writeme_core::{AnalysisConfig, UploadedFile};
/// use writeme_analysis::analyze_project;
///
/// let uploads = vec![
///     UploadedFile::new("Main.java", b"public class Main {".to_vec()),
///     UploadedFile::new("notes.txt", b"public class Ignored {".to_vec()),
/// ];
/// let project = analyze_project("Demo", "A test", &uploads, &AnalysisConfig::default()).unwrap();
/// assert_eq!(project.files().len(), 1);
/// assert_eq!(project.files()[0].classes(), ["Main"]);
/// assert!(project.structure().contains("notes.txt"));
/// ```
pub fn analyze_project(
    name: &str,
    description: &str,
    uploads: &[UploadedFile],
    config: &AnalysisConfig,
) -> Result<ProjectDescriptor, WritemeError> {
    let structure = structure::render_structure(uploads.iter().filter_map(UploadedFile::path));

    let mut files = Vec::new();
    for upload in uploads {
        let Some(path) = upload.path() else {
            continue;
        };
        if !config.is_source_file(path) {
            continue;
        }

        let content =
            std::str::from_utf8(upload.bytes()).map_err(|e| WritemeError::FileRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let meta = metadata::extract_metadata(content);
        tracing::debug!(
            path,
            classes = meta.classes.len(),
            methods = meta.methods.len(),
            "analysed source file"
        );
        files.push(FileDescriptor::new(path, content, meta.classes, meta.methods));
    }

    tracing::info!(
        uploads = uploads.len(),
        source_files = files.len(),
        "project analysed"
    );
    Ok(ProjectDescriptor::new(name, description, structure, files))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(path: &str, content: &str) -> UploadedFile {
        UploadedFile::new(path, content.as_bytes().to_vec())
    }

    #[test]
    fn non_source_files_only_appear_in_structure() {
        let uploads = vec![
            upload("src/App.java", "public class App {"),
            upload("src/app.properties", "public class NotJava {"),
            upload("pom.xml", "<project/>"),
        ];
        let project =
            analyze_project("p", "d", &uploads, &AnalysisConfig::default()).unwrap();

        let names: Vec<&str> = project.files().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["src/App.java"]);
        assert!(project.structure().contains("app.properties"));
        assert!(project.structure().contains("pom.xml"));
    }

    #[test]
    fn source_files_keep_upload_order_and_content() {
        let uploads = vec![
            upload("b/Zed.java", "public class Zed {"),
            upload("a/Alpha.java", "public class Alpha {"),
        ];
        let project =
            analyze_project("p", "d", &uploads, &AnalysisConfig::default()).unwrap();

        assert_eq!(project.files()[0].name(), "b/Zed.java");
        assert_eq!(project.files()[0].content(), "public class Zed {");
        assert_eq!(project.files()[1].classes(), ["Alpha"]);
    }

    #[test]
    fn source_files_without_symbols_are_still_descriptors() {
        let uploads = vec![upload("Empty.java", "// nothing here")];
        let project =
            analyze_project("p", "d", &uploads, &AnalysisConfig::default()).unwrap();
        assert_eq!(project.files().len(), 1);
        assert!(!project.files()[0].has_symbols());
    }

    #[test]
    fn unnamed_uploads_are_dropped() {
        let uploads = vec![
            UploadedFile::unnamed(b"public class Ghost {".to_vec()),
            upload("Real.java", "public class Real {"),
        ];
        let project =
            analyze_project("p", "d", &uploads, &AnalysisConfig::default()).unwrap();
        assert_eq!(project.files().len(), 1);
        assert_eq!(project.structure(), "```\n└── Real.java\n```");
    }

    #[test]
    fn invalid_utf8_source_fails_the_request() {
        let uploads = vec![
            upload("Good.java", "public class Good {"),
            UploadedFile::new("Bad.java", vec![0xff, 0xfe, 0xfd]),
        ];
        let err = analyze_project("p", "d", &uploads, &AnalysisConfig::default()).unwrap_err();
        match err {
            WritemeError::FileRead { path, .. } => assert_eq!(path, "Bad.java"),
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_outside_source_suffix_is_fine() {
        let uploads = vec![UploadedFile::new("logo.png", vec![0xff, 0xd8, 0x00])];
        let project =
            analyze_project("p", "d", &uploads, &AnalysisConfig::default()).unwrap();
        assert!(project.files().is_empty());
        assert!(project.structure().contains("logo.png"));
    }

    #[test]
    fn configured_suffix_selects_source_files() {
        let config = AnalysisConfig {
            source_suffix: ".kt".into(),
            ..AnalysisConfig::default()
        };
        let uploads = vec![
            upload("Main.kt", "public class Main {"),
            upload("Main.java", "public class Other {"),
        ];
        let project = analyze_project("p", "d", &uploads, &config).unwrap();
        assert_eq!(project.files().len(), 1);
        assert_eq!(project.files()[0].name(), "Main.kt");
    }

    #[test]
    fn name_and_description_pass_through() {
        let config = AnalysisConfig::default();
        let project = analyze_project("*Demo*", "uses `x` & <y>", &[], &config).unwrap();
        assert_eq!(project.name(), "*Demo*");
        assert_eq!(project.description(), "uses `x` & <y>");
        assert_eq!(project.structure(), "```\n```");
    }
}
