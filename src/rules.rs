//! Fixed rule tables consulted by the classifier.
//!
//! A [`RuleSet`] is built once at startup and shared read-only for the whole run.
//! Extensions are stored lowercase and without the leading dot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Files larger than this are never included (2 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;

/// Name of the report written when the user does not pick one.
pub const DEFAULT_OUTPUT_FILENAME: &str = "project_dump.txt";

const IGNORED_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    "venv",
    ".venv",
    ".idea",
    ".vscode",
    "build",
    "dist",
    "docs",
    ".parcel-cache",
    ".cache",
    ".next",
    ".husky",
    ".pnpm-store",
    "coverage",
    "tmp",
    "temp",
    ".terraform",
];

const IGNORED_EXTENSIONS: &[&str] = &[
    // compiled / native
    "pyc", "pyo", "pyd", "so", "dll", "exe",
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "ico", "svg", "webp", "avif",
    // archives
    "zip", "tar", "gz", "rar", "7z",
    // documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // databases, locks, logs
    "db", "sqlite", "sqlite3", "lock", "log",
    // data / model blobs
    "parquet", "h5", "hdf5", "pt", "onnx", "shp", "dbf", "nc",
];

const IGNORED_FILENAMES: &[&str] = &[
    "yarn.lock",
    "pnpm-lock.yaml",
    "package-lock.json",
    ".DS_Store",
    ".env",
    ".env.local",
    ".env.production",
    ".env.development",
    ".python-version",
    ".tool-versions",
];

const ALLOWED_CODE_EXTENSIONS: &[&str] = &[
    "py", "ts", "tsx", "js", "jsx", "java", "kt", "go", "rs", "rb", "php", "c", "cc", "cpp", "h",
    "hpp", "cs", "sql", "yml", "yaml", "toml", "ini", "cfg", "prisma", "graphql", "gql", "md",
];

const SCHEMA_HINT_DIRS: &[&str] = &[
    "prisma",
    "migrations",
    "migration",
    "db",
    "database",
    "sql",
    "schema",
    "alembic",
    "migrate",
    "migrations_sql",
    "liquibase",
    "flyway",
];

const SCHEMA_HINT_NAMES: &[&str] = &[
    "schema.prisma",
    "schema.sql",
    "init.sql",
    "migration.sql",
    "migration",
    "migrations",
    "entities",
    "models",
    "alembic.ini",
    "seeder",
    "seed.sql",
    "DDL.sql",
];

const BULK_DATA_EXTENSIONS: &[&str] = &["csv", "json", "jsonl", "ndjson", "geojson"];

const SCHEMA_EXTENSIONS: &[&str] = &["sql", "prisma"];

const MODEL_DIRS: &[&str] = &["entities", "entity", "models", "model"];

const MODEL_EXTENSIONS: &[&str] = &["ts", "js", "tsx", "jsx", "py", "rb", "java", "kt"];

/// The complete, immutable set of ignore and schema-detection rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Path segments that prune a directory (exact, case-sensitive).
    pub ignored_dirs: BTreeSet<String>,
    /// Extensions that are never included unless the file is schema-like.
    pub ignored_extensions: BTreeSet<String>,
    /// Exact file names that are always skipped.
    pub ignored_filenames: BTreeSet<String>,
    /// Extensions included by default.
    pub allowed_extensions: BTreeSet<String>,
    /// Directory names (case-insensitive) that mark everything below as schema-like.
    pub schema_hint_dirs: BTreeSet<String>,
    /// Lowercase substrings of a file name that mark it as schema-like.
    pub schema_hint_names: BTreeSet<String>,
    /// Extensions that are schema-like whatever the file is called.
    pub schema_extensions: BTreeSet<String>,
    /// Data extensions kept only when small and schema-like.
    pub bulk_data_extensions: BTreeSet<String>,
    /// ORM model directory names (case-insensitive).
    pub model_dirs: BTreeSet<String>,
    /// Backend-language extensions recognised inside model directories.
    pub model_extensions: BTreeSet<String>,
    /// Byte size above which a file is skipped.
    pub max_file_size: u64,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            ignored_dirs: exact(IGNORED_DIRS),
            ignored_extensions: lowered(IGNORED_EXTENSIONS),
            ignored_filenames: exact(IGNORED_FILENAMES),
            allowed_extensions: lowered(ALLOWED_CODE_EXTENSIONS),
            schema_hint_dirs: lowered(SCHEMA_HINT_DIRS),
            schema_hint_names: lowered(SCHEMA_HINT_NAMES),
            schema_extensions: lowered(SCHEMA_EXTENSIONS),
            bulk_data_extensions: lowered(BULK_DATA_EXTENSIONS),
            model_dirs: lowered(MODEL_DIRS),
            model_extensions: lowered(MODEL_EXTENSIONS),
            max_file_size: MAX_FILE_SIZE_BYTES,
        }
    }
}

fn exact(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn lowered(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}
