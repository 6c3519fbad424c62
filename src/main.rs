//! CLI for generating the retail sample datasets.
//!
//! Usage:
//!   # Default run: 10,000 customers + 50,000 sales into ./, then load
//!   retail-datagen
//!
//!   # CSV only, custom output directory
//!   retail-datagen --skip-load --output data/

use clap::Parser;
use retail_datagen::config::{DbConfig, DEFAULT_DATABASE_URL};
use retail_datagen::pipeline::{self, LoadStatus, RunConfig, RunReport};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "retail-datagen")]
#[command(version)]
#[command(about = "Generate deterministic retail sample data (customers + sales)", long_about = None)]
struct Args {
    /// Number of customers to generate
    #[arg(long, default_value = "10000")]
    customers: usize,

    /// Number of sales to generate
    #[arg(long, default_value = "50000")]
    sales: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Directory the CSV files are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// PostgreSQL connection URL for the bulk-load stage
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    /// Skip the PostgreSQL bulk-load stage
    #[arg(long)]
    skip_load: bool,

    /// Rows per INSERT statement during the bulk load
    #[arg(long, default_value = "1000")]
    batch_size: usize,

    /// Show a progress bar during the bulk load
    #[arg(short, long)]
    progress: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RunJsonOutput {
    seed: u64,
    output_dir: String,
    customers_generated: u64,
    sales_generated: u64,
    customers_csv: String,
    sales_csv: String,
    elapsed_secs: f64,
    database: DatabaseJsonOutput,
}

#[derive(Serialize)]
struct DatabaseJsonOutput {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    customers_loaded: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sales_loaded: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let db: DbConfig = args.database_url.parse()?;
    let config = RunConfig {
        customers: args.customers,
        sales: args.sales,
        seed: args.seed,
        output_dir: args.output.clone(),
        db,
        skip_load: args.skip_load,
        batch_size: args.batch_size,
        progress: args.progress,
        quiet: args.json,
    };

    if !args.json {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Retail sample data generation (seed {})", config.seed);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    let start = Instant::now();
    let report = pipeline::run(&config)?;
    let elapsed = start.elapsed();

    if args.json {
        let output_json = RunJsonOutput {
            seed: config.seed,
            output_dir: args.output.display().to_string(),
            customers_generated: report.customers_generated,
            sales_generated: report.sales_generated,
            customers_csv: report.customers_csv.path.display().to_string(),
            sales_csv: report.sales_csv.path.display().to_string(),
            elapsed_secs: elapsed.as_secs_f64(),
            database: database_json(&report),
        };
        println!("{}", serde_json::to_string_pretty(&output_json)?);
    } else {
        println!("\n✓ Data generation complete!");
        println!("\nStatistics:");
        println!("  Customers generated: {}", report.customers_generated);
        println!("  Sales generated: {}", report.sales_generated);
        println!("  Elapsed time: {:.3?}", elapsed);
        match &report.load {
            LoadStatus::Loaded(db_report) => {
                println!("\nPostgreSQL tables:");
                println!("  - customers: {} rows", db_report.customers_loaded);
                println!("  - sales: {} rows", db_report.sales_loaded);
            }
            LoadStatus::Failed(_) => {
                println!("\nDatabase load failed; data saved to CSV files only.");
            }
            LoadStatus::Skipped => {
                println!("\nDatabase load skipped.");
            }
        }
    }

    Ok(())
}

fn database_json(report: &RunReport) -> DatabaseJsonOutput {
    match &report.load {
        LoadStatus::Loaded(db_report) => DatabaseJsonOutput {
            status: "loaded".to_string(),
            customers_loaded: Some(db_report.customers_loaded),
            sales_loaded: Some(db_report.sales_loaded),
            error: None,
        },
        LoadStatus::Failed(reason) => DatabaseJsonOutput {
            status: "failed".to_string(),
            customers_loaded: None,
            sales_loaded: None,
            error: Some(reason.clone()),
        },
        LoadStatus::Skipped => DatabaseJsonOutput {
            status: "skipped".to_string(),
            customers_loaded: None,
            sales_loaded: None,
            error: None,
        },
    }
}
