//! Tree Builder: walks the project and renders the kept entries.

use crate::classify::{Classifier, Stat};
use crate::types::Traversal;
use crate::walk::Walker;
use std::path::{Path, PathBuf};

const INDENT: &str = "    ";
const DIR_MARK: &str = "📂";
const FILE_MARK: &str = "📄";
const SCHEMA_MARK: &str = "🗄️";

/// Walks `root` depth-first and collects the tree text, kept files and schema files.
///
/// Ignored directories are pruned before they are descended into. Within each
/// directory files are taken in name order; a directory line is rendered even
/// when none of its files survive the filters.
pub fn traverse(root: &Path, classifier: &Classifier) -> Traversal {
    let mut builder = TreeBuilder::default();
    for mut listing in Walker::new(root, classifier).listings() {
        let name = if listing.depth == 0 {
            display_name(root)
        } else {
            entry_name(&listing.path)
        };
        builder.push_dir(listing.depth, &name);

        listing
            .files
            .sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        for path in listing.files {
            let stat = Stat::probe(&path);
            if stat.is_dir() {
                continue;
            }
            let verdict = classifier.classify_with(&path, &stat);
            if verdict.ignored {
                continue;
            }
            builder.push_file(listing.depth + 1, path, verdict.schema_like);
        }
    }
    builder.finish()
}

/// Name used for the root directory in the tree and report header.
///
/// Falls back to the canonical path's last component for roots like `.`.
pub fn display_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[derive(Default)]
struct TreeBuilder {
    lines: Vec<String>,
    traversal: Traversal,
}

impl TreeBuilder {
    fn push_dir(&mut self, level: usize, name: &str) {
        if name.is_empty() {
            return;
        }
        self.lines
            .push(format!("{}{} {}/", INDENT.repeat(level), DIR_MARK, name));
    }

    fn push_file(&mut self, level: usize, path: PathBuf, schema_like: bool) {
        let mark = if schema_like { SCHEMA_MARK } else { FILE_MARK };
        self.lines.push(format!(
            "{}{} {}",
            INDENT.repeat(level),
            mark,
            entry_name(&path)
        ));
        if schema_like {
            self.traversal.schema_files.push(path.clone());
        }
        self.traversal.files.push(path);
    }

    fn finish(mut self) -> Traversal {
        self.traversal.tree = self.lines.join("\n");
        self.traversal
    }
}
