use std::fmt;

use serde::{Deserialize, Serialize};

/// A file handed to writeme for analysis.
///
/// `path` may contain `/` separators denoting virtual directories. It is
/// `None` when the uploader supplied no filename; such entries take no part
/// in the structure rendering or the analysis.
///
/// # Examples
///
/// ```
/// use writeme_core::UploadedFile;
///
/// let file = UploadedFile::new("src/Main.java", b"public class Main {}".to_vec());
/// assert_eq!(file.path(), Some("src/Main.java"));
/// assert_eq!(file.bytes().len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    path: Option<String>,
    bytes: Vec<u8>,
}

impl UploadedFile {
    /// Create an upload with a known path.
    pub fn new(path: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            path: Some(path.into()),
            bytes,
        }
    }

    /// Create an upload whose filename was not supplied.
    pub fn unnamed(bytes: Vec<u8>) -> Self {
        Self { path: None, bytes }
    }

    /// Original path, if any.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Raw content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Classes and methods found in one source file.
///
/// Order follows the line scan; duplicates are kept.
///
/// # Examples
///
/// ```
/// use writeme_core::FileDescriptor;
///
/// let file = FileDescriptor::new(
///     "Main.java",
///     "public class Main {}",
///     vec!["Main".into()],
///     vec![],
/// );
/// assert!(file.has_symbols());
/// assert_eq!(file.classes(), ["Main"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    name: String,
    content: String,
    classes: Vec<String>,
    methods: Vec<String>,
}

impl FileDescriptor {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        classes: Vec<String>,
        methods: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            classes,
            methods,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// `true` when at least one class or method was extracted.
    pub fn has_symbols(&self) -> bool {
        !self.classes.is_empty() || !self.methods.is_empty()
    }
}

/// Everything the prompt is built from, assembled once per request.
///
/// # Examples
///
/// ```
/// use writeme_core::ProjectDescriptor;
///
/// let project = ProjectDescriptor::new("Demo", "A test", "```\n```", vec![]);
/// assert_eq!(project.name(), "Demo");
/// assert!(project.files().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: String,
    description: String,
    structure: String,
    files: Vec<FileDescriptor>,
}

impl ProjectDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        structure: impl Into<String>,
        files: Vec<FileDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            structure: structure.into(),
            files,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Fenced directory-tree rendering of every upload.
    pub fn structure(&self) -> &str {
        &self.structure
    }

    /// Analysed source files, in upload order.
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }
}

/// A generated README document.
///
/// An empty `markdown` is still a successful generation; failures are
/// reported as [`WritemeError::GenerationUnavailable`](crate::WritemeError).
///
/// # Examples
///
/// ```
/// use writeme_core::Readme;
///
/// let readme = Readme {
///     markdown: "# Demo".into(),
///     model: "gpt-4o".into(),
/// };
/// assert_eq!(readme.to_string(), "# Demo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readme {
    /// Generated Markdown text.
    pub markdown: String,
    /// Model that produced the document.
    pub model: String,
}

impl fmt::Display for Readme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markdown)
    }
}
