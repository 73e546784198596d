//! Command-line interface for projdump.
//!
//! Prompts for a project directory and report name when they are not given on
//! the command line, then writes the report into the project directory.

use clap::{Parser, ValueEnum};
use projdump::output::{self, OutputFormat as ReportFormat};
use projdump::{DEFAULT_OUTPUT_FILENAME, DumpBuilder, DumpOptions, DumpResult, dump};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::exit;

/// projdump — single-file project snapshot with schema detection
#[derive(Parser)]
#[command(name = "projdump", version, about, long_about = None)]
struct Cli {
    /// Project directory (prompted for when omitted)
    root: Option<PathBuf>,

    /// Report file name, created inside the project directory
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Print the report to stdout instead of writing the report file
    #[arg(long)]
    stdout: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let (root, output_filename) = match cli.root {
        Some(root) => {
            if !root.is_dir() {
                eprintln!("Error: '{}' is not a valid directory", root.display());
                exit(1);
            }
            let name = cli
                .output
                .unwrap_or_else(|| DEFAULT_OUTPUT_FILENAME.to_string());
            (root, name)
        }
        None => {
            let root = prompt_root(&mut input);
            let name = match cli.output {
                Some(name) => name,
                None => prompt_output_filename(&mut input),
            };
            (root, name)
        }
    };

    let options = DumpBuilder::new(root).output_filename(output_filename).build();
    print_rules(&options);

    let result = match dump(&options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ An unexpected error occurred: {}", e);
            exit(1);
        }
    };

    if cli.stdout {
        match output::format_result(&result, cli.format.into(), cli.pretty) {
            Ok(out) => print!("{}", out),
            Err(e) => {
                eprintln!("❌ An unexpected error occurred: {}", e);
                exit(1);
            }
        }
        return;
    }

    let output_path = options.output_path();
    let written =
        output::write_result_to_file(&result, cli.format.into(), &output_path, cli.pretty);
    if let Err(e) = written {
        eprintln!("❌ An unexpected error occurred: {}", e);
        exit(1);
    }
    print_summary(&result, &output_path);
}

/// Asks for the project directory until an existing directory is entered.
fn prompt_root(input: &mut impl BufRead) -> PathBuf {
    loop {
        let answer = read_answer(
            input,
            "Please enter the path to the project directory (e.g., '.' for current): ",
        );
        let path = PathBuf::from(&answer);
        if path.is_dir() {
            return path;
        }
        println!(
            "❌ Error: The path '{}' is not a valid directory. Please try again.",
            answer
        );
    }
}

fn prompt_output_filename(input: &mut impl BufRead) -> String {
    let answer = read_answer(
        input,
        &format!("Enter the output file name (default: {}): ", DEFAULT_OUTPUT_FILENAME),
    );
    if answer.is_empty() {
        DEFAULT_OUTPUT_FILENAME.to_string()
    } else {
        answer
    }
}

fn read_answer(input: &mut impl BufRead, prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        eprintln!("Failed to write to stdout");
        exit(1);
    }
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => {
            eprintln!("\nError: no input");
            exit(1);
        }
        Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_rules(options: &DumpOptions) {
    let root = options
        .root
        .canonicalize()
        .unwrap_or_else(|_| options.root.clone());
    let rules = &options.rules;
    println!("\n🚀 Starting to process project directory: {}", root.display());
    println!("Ignoring directories: {}", join(&rules.ignored_dirs));
    println!("Ignoring extensions: {}", join(&rules.ignored_extensions));
    println!("Max file size: {} bytes\n", rules.max_file_size);
}

fn print_summary(result: &DumpResult, output_path: &std::path::Path) {
    let shown = output_path
        .canonicalize()
        .unwrap_or_else(|_| output_path.to_path_buf());
    println!("\n✅ Success! Project dump created at: {}", shown.display());
    println!("Total files processed: {}", result.files.len());
    if result.schema_files.is_empty() {
        println!("ℹ️ No obvious schema/migration files detected.");
        return;
    }
    println!("🗄️ Detected potential schema/migration files:");
    for path in &result.schema_files {
        println!("  - {}", path.display());
    }
}

fn join<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
