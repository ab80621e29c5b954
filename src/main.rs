//! Command-line entry point.
//!
//! Reads a vendor-evaluation CSV export, backs up any existing report,
//! writes the rendered document, and prints the ranking summary.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use vendorboard::{
    backup_existing, OutputFormat, ReportBuilder, ReportError, RowLayout, Strictness,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        process::exit(0);
    }

    // One pass: options consume their values, everything else is positional.
    let mut layout = RowLayout::Classic;
    let mut strictness = Strictness::Lenient;
    let mut format = OutputFormat::Html;
    let mut use_stdout = false;
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--layout" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --layout requires a value (classic | named)");
                    process::exit(1);
                }
                layout = match args[i + 1].as_str() {
                    "classic" => RowLayout::Classic,
                    "named" => RowLayout::Named,
                    other => {
                        eprintln!("Error: Unknown layout: {}", other);
                        process::exit(1);
                    }
                };
                i += 2;
            }
            "--strict" => {
                strictness = Strictness::Strict;
                i += 1;
            }
            "--json" => {
                format = OutputFormat::Json;
                i += 1;
            }
            "--summary" => {
                format = OutputFormat::Summary;
                i += 1;
            }
            "--stdout" => {
                use_stdout = true;
                i += 1;
            }
            arg if arg.starts_with("--") => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            arg => {
                positional.push(arg);
                i += 1;
            }
        }
    }

    let input_path = positional.first().copied().unwrap_or("data.csv").to_string();
    let output_path = positional.get(1).copied().unwrap_or("index.html").to_string();
    let use_stdout = use_stdout || output_path == "-";

    match generate(&input_path, &output_path, layout, strictness, format, use_stdout) {
        Ok(_) => {}
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [input.csv] [output.html] [options]", program);
    eprintln!("\nDefaults: input data.csv, output index.html");
    eprintln!("\nOptions:");
    eprintln!("  --layout <classic|named>  Declared column layout (default: classic)");
    eprintln!("  --strict                  Reject unparsable numeric cells");
    eprintln!("  --json                    Write a JSON dump instead of HTML");
    eprintln!("  --summary                 Write the text summary instead of HTML");
    eprintln!("  --stdout                  Write the report to stdout");
    eprintln!("\nExamples:");
    eprintln!("  {} data.csv index.html", program);
    eprintln!("  {} data.csv evaluation.json --json", program);
    eprintln!("  {} data.csv - --stdout --summary", program);
}

fn generate(
    input_path: &str,
    output_path: &str,
    layout: RowLayout,
    strictness: Strictness,
    format: OutputFormat,
    use_stdout: bool,
) -> Result<(), ReportError> {
    let report = ReportBuilder::new()
        .with_layout(layout)
        .with_strictness(strictness)
        .with_output_format(format)
        .build()?;

    println!("Reading CSV from: {}", input_path);
    let input = File::open(input_path)?;
    let (evaluation, stats) = report.extract(input)?;

    if use_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        report.render(&evaluation, &mut handle)?;
        handle.flush()?;
        return Ok(());
    }

    // Copy-before-overwrite; no rollback if the write below fails.
    if let Some(backup) = backup_existing(Path::new(output_path))? {
        println!("Backup created: {}", backup.display());
    }

    let mut output = File::create(output_path)?;
    report.render(&evaluation, &mut output)?;
    output.flush()?;
    println!("Generated report: {}", output_path);

    println!(
        "Rows scanned: {} ({} recognized, {} skipped)",
        stats.rows, stats.recognized, stats.skipped
    );
    println!();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report.summary(&evaluation, &mut handle)?;

    Ok(())
}

fn handle_error(error: ReportError) {
    match error {
        ReportError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        ReportError::Csv(csv_err) => {
            eprintln!("CSV Error: {}", csv_err);
            eprintln!("The input does not look like a readable delimited-text file.");
        }
        ReportError::HeaderNotFound { first, second } => {
            eprintln!("Header row not found.");
            eprintln!(
                "Expected a row starting with '{}' and '{}' to anchor the column layout.",
                first, second
            );
        }
        ReportError::LayoutMismatch { expected, found } => {
            eprintln!("Row layout mismatch: header has {} columns, need {}.", found, expected);
            eprintln!("Check the --layout option against the export's column prefix.");
        }
        ReportError::Value { row, column, cell } => {
            eprintln!(
                "Unparsable numeric value '{}' at row {}, column {}.",
                cell, row, column
            );
            eprintln!("Re-run without --strict to default such cells to 0.");
        }
        ReportError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
        }
        ReportError::Render(msg) => {
            eprintln!("Render Error: {}", msg);
        }
    }
}
