use crate::classify::Classifier;
use crate::error::DumpError;
use crate::options::DumpOptions;
use crate::tree::{display_name, traverse};
use crate::types::{DumpResult, FileEntry};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Builds the classifier that [`dump`] uses for `options`.
pub fn classifier_for(options: &DumpOptions) -> Classifier {
    Classifier::new(
        options.root.clone(),
        Arc::new(options.rules.clone()),
        options.output_filename.clone(),
    )
}

/// Reads `path` as strict UTF-8; undecodable content is an `InvalidData` error.
fn read_file_content(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| {
        if content_inspector::inspect(e.as_bytes()).is_binary() {
            io::Error::new(io::ErrorKind::InvalidData, "binary content detected")
        } else {
            io::Error::new(io::ErrorKind::InvalidData, e.utf8_error())
        }
    })
}

/// Walks the project, then reads every kept file in order.
///
/// A file that cannot be read gets a placeholder in its [`FileEntry`]; only an
/// invalid root fails the whole run.
pub fn dump(options: &DumpOptions) -> Result<DumpResult, DumpError> {
    if !options.root.is_dir() {
        return Err(DumpError::InvalidRoot(options.root.clone()));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Starting dump of {}", options.root.display());
    let classifier = classifier_for(options);
    let traversal = traverse(&options.root, &classifier);
    let schema_files = traversal
        .schema_files
        .iter()
        .map(|p| relative_to(p, &options.root))
        .collect();
    let schema_set: HashSet<&Path> = traversal
        .schema_files
        .iter()
        .map(PathBuf::as_path)
        .collect();
    let files = traversal
        .files
        .into_iter()
        .map(|path| {
            let schema_like = schema_set.contains(path.as_path());
            let (content, readable) = match read_file_content(&path) {
                Ok(content) => (content, true),
                Err(e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Could not read {}: {}", path.display(), e);
                    (format!("[Could not read file: {}]", e), false)
                }
            };
            FileEntry {
                relative_path: relative_to(&path, &options.root),
                path,
                schema_like,
                content,
                readable,
            }
        })
        .collect();
    Ok(DumpResult {
        project: display_name(&options.root),
        root: options.root.clone(),
        tree: traversal.tree,
        schema_files,
        files,
    })
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
