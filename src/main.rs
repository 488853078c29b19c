//! csvetl CLI - batch CSV cleaning and aggregation
//!
//! ```bash
//! csvetl run                        # Full pipeline with default paths
//! csvetl run -i data.csv -o out.csv --group-by Zone --measure Price
//! csvetl preview data.csv           # Parse only, show head/tail
//! ```

use clap::{Parser, Subcommand};
use csvetl::{
    logs::{log_error, log_info, log_success},
    read_table_with_delimiter, run, ConfigOverrides, PipelineConfig, PipelineOutcome,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "csvetl")]
#[command(about = "Clean a CSV and aggregate a measure per group", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: extract, transform, load
    Run {
        /// Input CSV file (default: <base-dir>/data/AmesHousing.csv)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output CSV file (default: <base-dir>/data/AmesHousing_transformed.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Categorical column to group by
        #[arg(long)]
        group_by: Option<String>,

        /// Numeric measure column to impute and average
        #[arg(long)]
        measure: Option<String>,

        /// Name the measure carries in the output
        #[arg(long)]
        rename_to: Option<String>,

        /// Base directory for relative default paths (default: cwd)
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },

    /// Parse a CSV file and show previews without transforming
    Preview {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Rows to show from each end
        #[arg(long, default_value = "10")]
        rows: usize,

        /// Dump all rows as JSON to a file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dump rows as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            group_by,
            measure,
            rename_to,
            base_dir,
        } => cmd_run(input, output, group_by, measure, rename_to, base_dir),

        Commands::Preview {
            input,
            delimiter,
            rows,
            output,
            json,
        } => cmd_preview(&input, delimiter, rows, output.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    group_by: Option<String>,
    measure: Option<String>,
    rename_to: Option<String>,
    base_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let base_dir = match base_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config = PipelineConfig::resolve(
        &base_dir,
        ConfigOverrides {
            input,
            output,
            group_by,
            measure,
            rename_to,
        },
    );

    match run(&config)? {
        PipelineOutcome::Completed(summary) => {
            log_success(format!(
                "{} rows in, {} groups out",
                summary.rows_in, summary.groups_out
            ));
            Ok(())
        }
        PipelineOutcome::InputMissing { path } => {
            // Reported, not raised: a missing input is a skip, not a crash.
            log_error(format!("Error: input file not found: {}", path.display()));
            Ok(())
        }
    }
}

fn cmd_preview(
    input: &Path,
    delimiter: Option<char>,
    rows: usize,
    output: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("Parsing CSV: {}", input.display()));

    let extracted = read_table_with_delimiter(input, delimiter)?;
    let table = extracted.table;

    log_info(format!("Encoding: {}", extracted.encoding));
    log_info(format!(
        "Delimiter: '{}'{}",
        match extracted.delimiter {
            '\t' => "\\t".to_string(),
            c => c.to_string(),
        },
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    ));
    log_info(format!("Columns: {}", table.headers().join(", ")));
    log_success(format!("Parsed {} rows", table.n_rows()));

    eprintln!("\nFirst {} rows of the dataset:", rows);
    eprint!("{}", table.head(rows));
    eprintln!("\nLast {} rows of the dataset:", rows);
    eprint!("{}", table.tail(rows));

    if json || output.is_some() {
        let dump = serde_json::to_string_pretty(&table.to_json_rows())?;
        match output {
            Some(p) => {
                fs::write(p, dump)?;
                log_success(format!("JSON written to: {}", p.display()));
            }
            None => println!("{}", dump),
        }
    }

    Ok(())
}
