//! Output formatting for dump results.
//!
//! The text format is the single-file project report; JSON is the serde form of
//! [`DumpResult`]. File contents are written exactly as read.

use crate::{DumpError, DumpResult};
use std::fs;
use std::path::Path;

const RULE_WIDTH: usize = 80;
const BANNER_WIDTH: usize = 20;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Formats the dump result into a string.
pub fn format_result(
    result: &DumpResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, DumpError> {
    match format {
        OutputFormat::Text => Ok(format_text(result)),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &DumpResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), DumpError> {
    let content = format_result(result, format, pretty)?;
    fs::write(&path, content).map_err(|e| DumpError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_text(result: &DumpResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::with_capacity(1024);

    out.push_str(&format!("Project: {}\n\n", result.project));
    out.push_str("--- REPO TREE STRUCTURE ---\n\n");
    out.push_str(&result.tree);
    out.push_str(&format!("\n\n{}\n\n", rule));

    out.push_str("--- LIKELY DB SCHEMA / MIGRATION FILES ---\n\n");
    if result.schema_files.is_empty() {
        out.push_str("(none detected)\n");
    }
    for path in &result.schema_files {
        out.push_str(&format!("- {}\n", path.display()));
    }
    out.push_str(&format!("\n{}\n\n", rule));

    out.push_str("--- FILE CONTENTS ---\n\n");
    for file in &result.files {
        out.push_str(&format!(
            "{} FILE: {} {}\n\n",
            banner,
            file.relative_path.display(),
            banner
        ));
        out.push_str(&file.content);
        out.push_str("\n\n");
    }
    out
}

fn format_json(result: &DumpResult, pretty: bool) -> Result<String, DumpError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
