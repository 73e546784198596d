use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a single walk of the project produced.
///
/// Every path in `schema_files` is also in `files`, in the same relative order,
/// and every file line of `tree` corresponds to one entry of `files`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    /// Indented tree listing, one line per kept directory or file.
    pub tree: String,
    /// Full paths of kept files, in visitation order.
    pub files: Vec<PathBuf>,
    /// Full paths of kept files that look like schema or migration definitions.
    pub schema_files: Vec<PathBuf>,
}

/// A kept file with its content.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path to the file.
    pub path: PathBuf,
    /// The path relative to the project root, as shown in the report.
    pub relative_path: PathBuf,
    /// Whether the file was flagged as a likely schema or migration file.
    pub schema_like: bool,
    /// The content of the file.
    ///
    /// If the file could not be read this holds a placeholder of the form
    /// `[Could not read file: <reason>]` instead.
    pub content: String,
    /// False when `content` is a placeholder.
    pub readable: bool,
}

/// The complete result of dumping a project.
#[derive(Debug, Serialize, Deserialize)]
pub struct DumpResult {
    /// Display name of the project root directory.
    pub project: String,
    /// The root directory as given.
    pub root: PathBuf,
    /// A visual tree of the kept directories and files.
    pub tree: String,
    /// Likely schema / migration files, relative to the root.
    pub schema_files: Vec<PathBuf>,
    /// All kept files with their content, in tree order.
    pub files: Vec<FileEntry>,
}
