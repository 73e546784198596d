//! Ignore and schema-likeness decisions for a single path.
//!
//! Every decision is recomputed on demand from the path, the [`RuleSet`] and the
//! filesystem metadata at that moment. Nothing here returns an error: a failed
//! stat degrades to "not a file, not large".

use crate::rules::RuleSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Filesystem metadata as seen by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    File { size: u64 },
    Dir,
    Missing,
    Failed,
}

impl Stat {
    /// Stats `path`, following symlinks.
    pub fn probe(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Stat::Dir,
            Ok(meta) if meta.is_file() => Stat::File { size: meta.len() },
            Ok(_) => Stat::Failed,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Stat::Missing,
            Err(_) => Stat::Failed,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Stat::File { .. })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Stat::Dir)
    }

    fn exceeds(&self, limit: u64) -> bool {
        match self {
            Stat::File { size } => *size > limit,
            _ => false,
        }
    }
}

/// Outcome of classifying one path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub ignored: bool,
    pub schema_like: bool,
}

/// Applies a [`RuleSet`] to paths below a walk root.
///
/// Directory-segment rules only look at the part of a path below `root`, so the
/// place a project lives on disk never changes how its files are classified.
#[derive(Debug, Clone)]
pub struct Classifier {
    root: PathBuf,
    rules: Arc<RuleSet>,
    output_filename: String,
}

impl Classifier {
    pub fn new(
        root: impl Into<PathBuf>,
        rules: Arc<RuleSet>,
        output_filename: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            rules,
            output_filename: output_filename.into(),
        }
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.classify(path).ignored
    }

    pub fn is_schema_like(&self, path: &Path) -> bool {
        self.schema_like(&PathParts::new(path, &self.root))
    }

    pub fn classify(&self, path: &Path) -> Classification {
        self.classify_with(path, &Stat::probe(path))
    }

    /// Classifies `path` using an already obtained [`Stat`].
    pub fn classify_with(&self, path: &Path, stat: &Stat) -> Classification {
        let parts = PathParts::new(path, &self.root);
        let schema_like = self.schema_like(&parts);
        Classification {
            ignored: self.ignored(&parts, stat, schema_like),
            schema_like,
        }
    }

    fn ignored(&self, parts: &PathParts<'_>, stat: &Stat, schema_like: bool) -> bool {
        let rules = &*self.rules;
        let ext = parts.extension.as_deref();
        let large = stat.exceeds(rules.max_file_size);

        if parts.name == self.output_filename || rules.ignored_filenames.contains(parts.name) {
            return true;
        }
        if parts.segments.iter().any(|s| rules.ignored_dirs.contains(*s)) {
            return true;
        }
        // Size wins over every exemption, schema-like files included.
        if stat.is_file() && large {
            return true;
        }
        if ext.is_some_and(|e| rules.bulk_data_extensions.contains(e)) && (!schema_like || large) {
            return true;
        }
        if stat.is_file() {
            if schema_like {
                return false;
            }
            if !ext.is_some_and(|e| rules.allowed_extensions.contains(e)) {
                return true;
            }
        }
        ext.is_some_and(|e| rules.ignored_extensions.contains(e))
    }

    fn schema_like(&self, parts: &PathParts<'_>) -> bool {
        let rules = &*self.rules;
        let lowered: Vec<String> = parts.segments.iter().map(|s| s.to_lowercase()).collect();

        if lowered.iter().any(|s| rules.schema_hint_dirs.contains(s)) {
            return true;
        }
        let name = parts.name.to_lowercase();
        if rules.schema_hint_names.iter().any(|hint| name.contains(hint.as_str())) {
            return true;
        }
        let ext = parts.extension.as_deref();
        if ext.is_some_and(|e| rules.schema_extensions.contains(e)) {
            return true;
        }
        lowered.iter().any(|s| rules.model_dirs.contains(s))
            && ext.is_some_and(|e| rules.model_extensions.contains(e))
    }
}

/// The pieces of a path the rules look at.
struct PathParts<'a> {
    name: &'a str,
    segments: Vec<&'a str>,
    extension: Option<String>,
}

impl<'a> PathParts<'a> {
    fn new(path: &'a Path, root: &Path) -> Self {
        let below_root = path.strip_prefix(root).unwrap_or(path);
        let segments = below_root
            .components()
            .filter_map(|c| match c {
                Component::Normal(os) => os.to_str(),
                _ => None,
            })
            .collect();
        Self {
            name: path.file_name().and_then(|n| n.to_str()).unwrap_or(""),
            segments,
            extension: path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_lowercase),
        }
    }
}
