use crate::classify::Classifier;
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One visited directory and the non-directory entries directly inside it.
#[derive(Debug)]
pub(crate) struct DirListing {
    pub path: PathBuf,
    pub depth: usize,
    pub files: Vec<PathBuf>,
}

/// Top-down walk that prunes ignored directories before descending.
pub(crate) struct Walker {
    inner: ignore::Walk,
}

impl Walker {
    pub(crate) fn new(root: &Path, classifier: &Classifier) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let classifier = classifier.clone();
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if entry.depth() == 0 || !is_dir {
                return true;
            }
            let pruned = classifier.is_ignored(entry.path());
            #[cfg(feature = "logging")]
            if pruned {
                tracing::debug!("Pruning directory {}", entry.path().display());
            }
            !pruned
        });
        Self {
            inner: builder.build(),
        }
    }

    /// Groups the walk into directory listings, in the order directories were visited.
    pub(crate) fn listings(self) -> Vec<DirListing> {
        let mut listings: Vec<DirListing> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();
        for result in self.inner {
            let entry = match result {
                Ok(entry) => entry,
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry: {}", _err);
                    continue;
                }
            };
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                index.insert(entry.path().to_path_buf(), listings.len());
                listings.push(DirListing {
                    path: entry.path().to_path_buf(),
                    depth: entry.depth(),
                    files: Vec::new(),
                });
                continue;
            }
            let slot = entry.path().parent().and_then(|parent| index.get(parent));
            if let Some(&slot) = slot {
                listings[slot].files.push(entry.into_path());
            }
        }
        listings
    }
}
