//! # Projdump
//!
//! `projdump` walks a project directory and produces a single-file snapshot of it:
//! an indented tree of the kept entries, a list of files that look like database
//! schema or migration definitions, and the verbatim contents of every kept file.
//!
//! Which paths are kept is decided by a fixed [`RuleSet`]: ignored directory names
//! prune whole subtrees, binary/archive/lock extensions and oversized files are
//! skipped, and schema-like files (SQL, Prisma, migrations, ORM models) are kept
//! even when their extension is not on the code allowlist.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate (on by default).
//!
//! # Example
//!
//! ```no_run
//! use projdump::{DumpBuilder, dump, output};
//!
//! let options = DumpBuilder::new(".")
//!     .output_filename("project_dump.txt")
//!     .build();
//!
//! let result = dump(&options).expect("Failed to dump project");
//!
//! for path in &result.schema_files {
//!     println!("schema: {}", path.display());
//! }
//! output::write_result_to_file(&result, output::OutputFormat::Text, options.output_path(), false)
//!     .expect("Failed to write report");
//! ```

mod classify;
mod engine;
mod error;
mod options;
pub mod output;
mod rules;
mod tree;
mod types;
mod walk;

pub use classify::{Classification, Classifier, Stat};
pub use engine::{classifier_for, dump};
pub use error::DumpError;
pub use options::{DumpBuilder, DumpOptions};
pub use rules::{DEFAULT_OUTPUT_FILENAME, MAX_FILE_SIZE_BYTES, RuleSet};
pub use tree::{display_name, traverse};
pub use types::{DumpResult, FileEntry, Traversal};
