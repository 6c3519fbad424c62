//! Best-effort bulk loading of the generated datasets into PostgreSQL.
//!
//! Drops and recreates the `customers` and `sales` tables, then inserts
//! all rows in batched multi-row statements. Final row counts are read
//! back for verification.

use crate::config::DbConfig;
use crate::generator::{Customer, Sale};
use crate::writer::{CUSTOMER_COLUMNS, SALES_COLUMNS};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use postgres::types::ToSql;
use postgres::{Client, NoTls};

/// Rows per INSERT statement. 7 columns x 1000 rows stays well under
/// the protocol's 65535 parameter limit.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Largest usable batch: one statement binds at most 65535 parameters
/// and sales rows bind the most columns
const MAX_BATCH_SIZE: usize = 65_535 / SALES_COLUMNS.len();

const CREATE_CUSTOMERS_TABLE: &str = "CREATE TABLE \"customers\" (
    \"customer_id\" BIGINT NOT NULL,
    \"name\" TEXT NOT NULL,
    \"email\" TEXT NOT NULL,
    \"age\" INTEGER NOT NULL,
    \"city\" TEXT NOT NULL,
    \"registration_date\" TIMESTAMP NOT NULL
)";

const CREATE_SALES_TABLE: &str = "CREATE TABLE \"sales\" (
    \"sale_id\" BIGINT NOT NULL,
    \"customer_id\" BIGINT NOT NULL,
    \"product\" TEXT NOT NULL,
    \"category\" TEXT NOT NULL,
    \"amount\" DOUBLE PRECISION NOT NULL,
    \"quantity\" INTEGER NOT NULL,
    \"sale_date\" TIMESTAMP NOT NULL
)";

/// Row counts verified after a completed load
#[derive(Debug, Clone, Copy)]
pub struct LoadReport {
    pub customers_loaded: u64,
    pub sales_loaded: u64,
}

/// Loads generated datasets into PostgreSQL
pub struct PgLoader {
    config: DbConfig,
    batch_size: usize,
    progress: bool,
}

impl PgLoader {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            batch_size: DEFAULT_BATCH_SIZE,
            progress: false,
        }
    }

    /// Set rows per INSERT statement, clamped to what one statement
    /// can bind
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        // chunks() panics on zero
        self.batch_size = batch_size.clamp(1, MAX_BATCH_SIZE);
        self
    }

    /// Show a progress bar while inserting
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Run the full load: recreate both tables, insert every row, and
    /// verify the stored row counts
    pub fn load(&self, customers: &[Customer], sales: &[Sale]) -> Result<LoadReport> {
        let mut client = self.connect()?;

        self.recreate_tables(&mut client)?;
        self.insert_customers(&mut client, customers)
            .context("Failed to insert customers")?;
        self.insert_sales(&mut client, sales)
            .context("Failed to insert sales")?;

        Ok(LoadReport {
            customers_loaded: row_count(&mut client, "customers")?,
            sales_loaded: row_count(&mut client, "sales")?,
        })
    }

    fn connect(&self) -> Result<Client> {
        let mut pg_config = postgres::Config::new();
        pg_config
            .host(&self.config.host)
            .port(self.config.port)
            .user(&self.config.user)
            .password(&self.config.password)
            .dbname(&self.config.dbname);
        pg_config.connect(NoTls).with_context(|| {
            format!(
                "Failed to connect to PostgreSQL at {}",
                self.config.endpoint()
            )
        })
    }

    fn recreate_tables(&self, client: &mut Client) -> Result<()> {
        for table in ["customers", "sales"] {
            client
                .execute(&format!("DROP TABLE IF EXISTS \"{}\"", table), &[])
                .with_context(|| format!("Failed to drop table {}", table))?;
        }
        client
            .execute(CREATE_CUSTOMERS_TABLE, &[])
            .context("Failed to create table customers")?;
        client
            .execute(CREATE_SALES_TABLE, &[])
            .context("Failed to create table sales")?;
        Ok(())
    }

    fn insert_customers(&self, client: &mut Client, customers: &[Customer]) -> Result<()> {
        let progress_bar = self.insert_progress(customers.len() as u64);

        for chunk in customers.chunks(self.batch_size) {
            let sql = batch_insert_sql("customers", &CUSTOMER_COLUMNS, chunk.len());
            let mut params: Vec<Box<dyn ToSql + Sync + Send>> =
                Vec::with_capacity(chunk.len() * CUSTOMER_COLUMNS.len());
            for customer in chunk {
                params.push(Box::new(customer.customer_id));
                params.push(Box::new(customer.name.clone()));
                params.push(Box::new(customer.email.clone()));
                params.push(Box::new(customer.age));
                params.push(Box::new(customer.city));
                params.push(Box::new(customer.registration_date));
            }
            execute_insert(client, &sql, &params)?;
            if let Some(pb) = &progress_bar {
                pb.inc(chunk.len() as u64);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_with_message("customers loaded");
        }
        Ok(())
    }

    fn insert_sales(&self, client: &mut Client, sales: &[Sale]) -> Result<()> {
        let progress_bar = self.insert_progress(sales.len() as u64);

        for chunk in sales.chunks(self.batch_size) {
            let sql = batch_insert_sql("sales", &SALES_COLUMNS, chunk.len());
            let mut params: Vec<Box<dyn ToSql + Sync + Send>> =
                Vec::with_capacity(chunk.len() * SALES_COLUMNS.len());
            for sale in chunk {
                params.push(Box::new(sale.sale_id));
                params.push(Box::new(sale.customer_id));
                params.push(Box::new(sale.product));
                params.push(Box::new(sale.category.as_str()));
                params.push(Box::new(sale.amount));
                params.push(Box::new(sale.quantity));
                params.push(Box::new(sale.sale_date));
            }
            execute_insert(client, &sql, &params)?;
            if let Some(pb) = &progress_bar {
                pb.inc(chunk.len() as u64);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_with_message("sales loaded");
        }
        Ok(())
    }

    fn insert_progress(&self, total: u64) -> Option<ProgressBar> {
        if !self.progress {
            return None;
        }
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%)",
                )
                .unwrap()
                .progress_chars("=>-"),
        );
        Some(pb)
    }
}

fn execute_insert(
    client: &mut Client,
    sql: &str,
    params: &[Box<dyn ToSql + Sync + Send>],
) -> Result<()> {
    let param_refs: Vec<&(dyn ToSql + Sync)> = params
        .iter()
        .map(|p| p.as_ref() as &(dyn ToSql + Sync))
        .collect();
    client.execute(sql, &param_refs)?;
    Ok(())
}

fn row_count(client: &mut Client, table: &str) -> Result<u64> {
    let row = client
        .query_one(&format!("SELECT COUNT(*) FROM \"{}\"", table), &[])
        .with_context(|| format!("Failed to count rows in {}", table))?;
    let count: i64 = row.get(0);
    Ok(count as u64)
}

/// Build a multi-row INSERT statement with positional placeholders
fn batch_insert_sql(table: &str, columns: &[&str], row_count: usize) -> String {
    let mut placeholders: Vec<String> = Vec::with_capacity(row_count);
    let mut param_idx = 1;

    for _ in 0..row_count {
        let row_placeholders: Vec<String> = (0..columns.len())
            .map(|_| {
                let p = format!("${param_idx}");
                param_idx += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row_placeholders.join(", ")));
    }

    format!(
        "INSERT INTO \"{}\" ({}) VALUES {}",
        table,
        columns
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_insert_sql_placeholders() {
        let sql = batch_insert_sql("customers", &["a", "b"], 3);
        assert!(sql.starts_with("INSERT INTO \"customers\" (\"a\", \"b\") VALUES"));
        assert!(sql.contains("($1, $2)"));
        assert!(sql.contains("($3, $4)"));
        assert!(sql.contains("($5, $6)"));
        assert!(!sql.contains("$7"));
    }

    #[test]
    fn test_create_statements_cover_all_columns() {
        for column in CUSTOMER_COLUMNS {
            assert!(CREATE_CUSTOMERS_TABLE.contains(column));
        }
        for column in SALES_COLUMNS {
            assert!(CREATE_SALES_TABLE.contains(column));
        }
    }

    #[test]
    fn test_builder_defaults() {
        let loader = PgLoader::new(DbConfig::default());
        assert_eq!(loader.batch_size, DEFAULT_BATCH_SIZE);
        assert!(!loader.progress);

        let loader = PgLoader::new(DbConfig::default()).with_batch_size(0);
        assert_eq!(loader.batch_size, 1);
    }

    #[test]
    fn test_batch_size_clamped_to_bind_limit() {
        let loader = PgLoader::new(DbConfig::default()).with_batch_size(100_000);
        assert_eq!(loader.batch_size, MAX_BATCH_SIZE);
        assert!(loader.batch_size * SALES_COLUMNS.len() <= 65_535);
    }
}
