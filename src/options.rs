use crate::rules::{DEFAULT_OUTPUT_FILENAME, RuleSet};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpOptions {
    pub root: PathBuf,
    pub output_filename: String,
    pub rules: RuleSet,
}
impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            rules: RuleSet::default(),
        }
    }
}
impl DumpOptions {
    /// Where the report is written: inside the project root.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_filename)
    }
}
#[derive(Debug, Default)]
pub struct DumpBuilder {
    options: DumpOptions,
}
impl DumpBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DumpOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_filename(mut self, name: impl Into<String>) -> Self {
        self.options.output_filename = name.into();
        self
    }
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.options.rules = rules;
        self
    }
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.options.rules.max_file_size = bytes;
        self
    }
    pub fn build(self) -> DumpOptions {
        self.options
    }
}
