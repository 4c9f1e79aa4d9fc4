//! csvport CLI - Export tabular data to CSV files
//!
//! # Commands
//!
//! ```bash
//! csvport export http://localhost:5000/api/journalists/export
//! csvport encode batch.json               # JSON file -> CSV on stdout
//! ```

use clap::{Parser, Subcommand};
use csvport::{
    encode_records, export_endpoint, records_from_file, report, ExportOptions,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "csvport")]
#[command(about = "Export JSON record batches and table snapshots to CSV", long_about = None)]
struct Cli {
    /// Suppress progress output (errors stay visible)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a JSON array of records from an endpoint and save it as CSV
    Export {
        /// Endpoint URL returning a JSON array of objects
        endpoint: String,

        /// Output directory (default: CSVPORT_OUTPUT_DIR or current dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Filename (default: export-<epoch-millis>.csv)
        #[arg(long)]
        filename: Option<String>,

        /// Fetch timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Encode a JSON batch file as CSV
    Encode {
        /// Input JSON file (array of records)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    report::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Export {
            endpoint,
            output_dir,
            filename,
            timeout,
        } => cmd_export(&endpoint, output_dir, filename, timeout).await,

        Commands::Encode { input, output } => cmd_encode(&input, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_export(
    endpoint: &str,
    output_dir: Option<PathBuf>,
    filename: Option<String>,
    timeout: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExportOptions {
        output_dir: output_dir.unwrap_or_else(default_output_dir),
        filename,
        timeout: timeout.map(Duration::from_secs),
    };

    let outcome = export_endpoint(endpoint, &options).await?;

    if outcome.path.is_none() {
        report::log_info("Endpoint returned zero records; no file was written");
    }

    Ok(())
}

fn cmd_encode(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    report::log_info(format!("Encoding batch: {}", input.display()));

    let records = records_from_file(input)?;
    let document = encode_records(&records);

    if document.is_empty() {
        report::log_warning("Empty batch, nothing to encode");
        return Ok(());
    }

    report::log_success(format!(
        "Encoded {} rows, {} columns",
        document.row_count,
        document.headers.len()
    ));
    write_output(&document.text, output)?;

    Ok(())
}

/// Default output directory: CSVPORT_OUTPUT_DIR, else the current dir.
fn default_output_dir() -> PathBuf {
    std::env::var("CSVPORT_OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            report::log_success(format!("Output written to: {}", p.display()));
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
