use std::path::{Component, Path};

use writeme_core::{AnalysisConfig, UploadedFile, WritemeError};

/// Collect every file under `root` as an upload, the way a browser folder
/// upload would hand them over.
///
/// Respects `.gitignore` and skips hidden files, files larger than
/// `config.max_file_size`, and paths matching `config.skip_patterns`.
/// Returned paths are relative to `root`, joined with `/`, in file-name order.
///
/// # Errors
///
/// Returns [`WritemeError::FileNotFound`] if `root` does not exist,
/// [`WritemeError::Config`] if a skip pattern is not a valid glob, and
/// [`WritemeError::FileRead`] if a file cannot be read.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use writeme_core::AnalysisConfig;
/// use writeme_analysis::uploads::collect_uploads;
///
/// let uploads = collect_uploads(Path::new("."), &AnalysisConfig::default()).unwrap();
/// for upload in &uploads {
///     println!("{}", upload.path().unwrap_or_default());
/// }
/// ```
pub fn collect_uploads(
    root: &Path,
    config: &AnalysisConfig,
) -> Result<Vec<UploadedFile>, WritemeError> {
    if !root.exists() {
        return Err(WritemeError::FileNotFound(root.to_path_buf()));
    }

    let skip = config
        .skip_patterns
        .iter()
        .map(|p| {
            glob::Pattern::new(p)
                .map_err(|e| WritemeError::Config(format!("invalid skip pattern '{p}': {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let walker = ignore::WalkBuilder::new(root)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();
    let mut uploads = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_file() {
            continue;
        }

        let path = entry.path();
        let relative = upload_path(path.strip_prefix(root).unwrap_or(path));

        if skip.iter().any(|p| p.matches(&relative)) {
            tracing::debug!(path = %relative, "skipped by pattern");
            continue;
        }

        let metadata = std::fs::metadata(path).map_err(|e| read_error(&relative, e))?;
        if metadata.len() > config.max_file_size {
            tracing::debug!(path = %relative, size = metadata.len(), "skipped: too large");
            continue;
        }

        let bytes = std::fs::read(path).map_err(|e| read_error(&relative, e))?;
        uploads.push(UploadedFile::new(relative, bytes));
    }

    tracing::debug!(count = uploads.len(), root = %root.display(), "collected uploads");
    Ok(uploads)
}

fn upload_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn read_error(path: &str, err: std::io::Error) -> WritemeError {
    WritemeError::FileRead {
        path: path.to_string(),
        reason: err.to_string(),
    }
}
