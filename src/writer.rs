//! CSV persistence for the generated datasets.

use crate::generator::{Customer, Sale};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use csv::Writer;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Buffer size for CSV writers (256KB)
const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// File name for the customer dataset
pub const CUSTOMERS_FILE: &str = "customers.csv";

/// File name for the sales dataset
pub const SALES_FILE: &str = "sales.csv";

/// Header row for customers.csv
pub const CUSTOMER_COLUMNS: [&str; 6] = [
    "customer_id",
    "name",
    "email",
    "age",
    "city",
    "registration_date",
];

/// Header row for sales.csv
pub const SALES_COLUMNS: [&str; 7] = [
    "sale_id",
    "customer_id",
    "product",
    "category",
    "amount",
    "quantity",
    "sale_date",
];

/// Path and row count of one written CSV file
#[derive(Debug, Clone)]
pub struct CsvReport {
    pub path: PathBuf,
    pub rows: u64,
}

/// Create the output directory if it doesn't exist
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

/// Write the customer dataset to `customers.csv` in `dir`, overwriting
/// any existing file. Zero customers produce a header-only file.
pub fn write_customers(dir: &Path, customers: &[Customer]) -> Result<CsvReport> {
    let path = dir.join(CUSTOMERS_FILE);
    let mut writer = open_writer(&path)?;

    writer.write_record(CUSTOMER_COLUMNS)?;
    for customer in customers {
        writer.write_record([
            customer.customer_id.to_string(),
            customer.name.clone(),
            customer.email.clone(),
            customer.age.to_string(),
            customer.city.to_string(),
            format_timestamp(&customer.registration_date),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(CsvReport {
        path,
        rows: customers.len() as u64,
    })
}

/// Write the sales dataset to `sales.csv` in `dir`, overwriting any
/// existing file. Zero sales produce a header-only file.
pub fn write_sales(dir: &Path, sales: &[Sale]) -> Result<CsvReport> {
    let path = dir.join(SALES_FILE);
    let mut writer = open_writer(&path)?;

    writer.write_record(SALES_COLUMNS)?;
    for sale in sales {
        writer.write_record([
            sale.sale_id.to_string(),
            sale.customer_id.to_string(),
            sale.product.to_string(),
            sale.category.to_string(),
            format!("{:.2}", sale.amount),
            sale.quantity.to_string(),
            format_timestamp(&sale.sale_date),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(CsvReport {
        path,
        rows: sales.len() as u64,
    })
}

fn open_writer(path: &Path) -> Result<Writer<BufWriter<File>>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(Writer::from_writer(BufWriter::with_capacity(
        WRITER_BUFFER_SIZE,
        file,
    )))
}

fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
