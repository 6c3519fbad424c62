//! Deterministic retail sample data generation.
//!
//! Generates two related datasets, customers and sales, from a seeded
//! RNG. Output goes to CSV files and, optionally, to PostgreSQL tables.
//!
//! # Example
//!
//! ```rust
//! use retail_datagen::Generator;
//!
//! // Same seed, same data
//! let mut gen = Generator::new(42);
//! let customers = gen.generate_customers(5);
//! let sales = gen.generate_sales(&customers, 20);
//!
//! assert_eq!(customers.len(), 5);
//! assert_eq!(sales.len(), 20);
//! ```

pub mod catalog;
pub mod config;
pub mod fake;
pub mod generator;
pub mod loader;
pub mod pipeline;
pub mod writer;

pub use catalog::{Category, PRODUCTS};
pub use config::{DbConfig, DEFAULT_DATABASE_URL};
pub use generator::{
    Customer, Generator, Sale, DEFAULT_CUSTOMER_COUNT, DEFAULT_SALES_COUNT, DEFAULT_SEED,
};
pub use loader::{LoadReport, PgLoader, DEFAULT_BATCH_SIZE};
pub use pipeline::{run, LoadStatus, RunConfig, RunReport};
pub use writer::{CsvReport, CUSTOMERS_FILE, SALES_FILE};
