//! End-to-end pipeline from generated records to CSV files and the
//! optional database load.

use crate::config::DbConfig;
use crate::generator::{Generator, DEFAULT_CUSTOMER_COUNT, DEFAULT_SALES_COUNT, DEFAULT_SEED};
use crate::loader::{LoadReport, PgLoader, DEFAULT_BATCH_SIZE};
use crate::writer::{self, CsvReport};
use anyhow::Result;
use std::path::PathBuf;

/// Settings for one pipeline run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub customers: usize,
    pub sales: usize,
    pub seed: u64,
    pub output_dir: PathBuf,
    pub db: DbConfig,
    pub skip_load: bool,
    pub batch_size: usize,
    pub progress: bool,
    /// Suppress stdout status lines (stderr warnings still print)
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            customers: DEFAULT_CUSTOMER_COUNT,
            sales: DEFAULT_SALES_COUNT,
            seed: DEFAULT_SEED,
            output_dir: PathBuf::from("."),
            db: DbConfig::default(),
            skip_load: false,
            batch_size: DEFAULT_BATCH_SIZE,
            progress: false,
            quiet: false,
        }
    }
}

/// Outcome of the bulk-load stage
#[derive(Debug, Clone)]
pub enum LoadStatus {
    /// Both tables loaded and counted
    Loaded(LoadReport),
    /// Load failed; the datasets exist as CSV only
    Failed(String),
    /// Load disabled for this run
    Skipped,
}

/// Everything a completed run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub customers_generated: u64,
    pub sales_generated: u64,
    pub customers_csv: CsvReport,
    pub sales_csv: CsvReport,
    pub load: LoadStatus,
}

/// Run the full pipeline. Generation and CSV errors are fatal; a load
/// failure is downgraded to a warning and reported in the returned
/// `LoadStatus` so the process can still exit cleanly.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    if !config.quiet {
        println!("Generating {} customers...", config.customers);
    }
    let mut generator = Generator::new(config.seed);
    let customers = generator.generate_customers(config.customers);

    if !config.quiet {
        println!("Generating {} sales...", config.sales);
    }
    let sales = generator.generate_sales(&customers, config.sales);

    writer::ensure_output_dir(&config.output_dir)?;
    let customers_csv = writer::write_customers(&config.output_dir, &customers)?;
    let sales_csv = writer::write_sales(&config.output_dir, &sales)?;
    if !config.quiet {
        println!(
            "Saved: {} ({} rows)",
            customers_csv.path.display(),
            customers_csv.rows
        );
        println!(
            "Saved: {} ({} rows)",
            sales_csv.path.display(),
            sales_csv.rows
        );
    }

    let load = if config.skip_load {
        LoadStatus::Skipped
    } else {
        if !config.quiet {
            println!(
                "Loading data into PostgreSQL at {}...",
                config.db.endpoint()
            );
        }
        let loader = PgLoader::new(config.db.clone())
            .with_batch_size(config.batch_size)
            .with_progress(config.progress && !config.quiet);
        match loader.load(&customers, &sales) {
            Ok(report) => LoadStatus::Loaded(report),
            Err(e) => {
                eprintln!("Warning: Could not load to PostgreSQL: {e:#}");
                eprintln!("Data saved to CSV files only.");
                LoadStatus::Failed(format!("{e:#}"))
            }
        }
    };

    Ok(RunReport {
        customers_generated: customers.len() as u64,
        sales_generated: sales.len() as u64,
        customers_csv,
        sales_csv,
        load,
    })
}
