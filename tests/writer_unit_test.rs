//! Unit tests for CSV output, covering header layout, field formatting,
//! and byte-identical reruns.

use retail_datagen::generator::Generator;
use retail_datagen::writer::{self, CUSTOMERS_FILE, SALES_FILE};
use tempfile::TempDir;

#[test]
fn test_write_customers_header_and_rows() {
    let temp_dir = TempDir::new().unwrap();
    let mut gen = Generator::new(42);
    let customers = gen.generate_customers(10);

    let report = writer::write_customers(temp_dir.path(), &customers).unwrap();
    assert_eq!(report.rows, 10);
    assert_eq!(report.path, temp_dir.path().join(CUSTOMERS_FILE));

    let content = std::fs::read_to_string(&report.path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "customer_id,name,email,age,city,registration_date");
    assert!(lines[1].starts_with("1,"));
}

#[test]
fn test_write_sales_header_and_rows() {
    let temp_dir = TempDir::new().unwrap();
    let mut gen = Generator::new(42);
    let customers = gen.generate_customers(5);
    let sales = gen.generate_sales(&customers, 25);

    let report = writer::write_sales(temp_dir.path(), &sales).unwrap();
    assert_eq!(report.rows, 25);

    let content = std::fs::read_to_string(&report.path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(
        lines[0],
        "sale_id,customer_id,product,category,amount,quantity,sale_date"
    );
}

#[test]
fn test_timestamp_format() {
    let temp_dir = TempDir::new().unwrap();
    let mut gen = Generator::new(42);
    let customers = gen.generate_customers(3);

    let report = writer::write_customers(temp_dir.path(), &customers).unwrap();
    let content = std::fs::read_to_string(&report.path).unwrap();

    for line in content.lines().skip(1) {
        let registration = line.rsplit(',').next().unwrap();
        // "2021-03-05 00:00:00"
        assert_eq!(registration.len(), 19);
        assert!(registration.ends_with(" 00:00:00"));
    }
}

#[test]
fn test_amount_has_two_decimals() {
    let temp_dir = TempDir::new().unwrap();
    let mut gen = Generator::new(42);
    let customers = gen.generate_customers(5);
    let sales = gen.generate_sales(&customers, 50);

    let report = writer::write_sales(temp_dir.path(), &sales).unwrap();
    let content = std::fs::read_to_string(&report.path).unwrap();

    for line in content.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        let amount = fields[4];
        let decimals = amount.rsplit('.').next().unwrap();
        assert_eq!(decimals.len(), 2, "amount {} should have 2 decimals", amount);
    }
}

#[test]
fn test_deterministic_csv_output() {
    let temp_dir1 = TempDir::new().unwrap();
    let temp_dir2 = TempDir::new().unwrap();

    for dir in [temp_dir1.path(), temp_dir2.path()] {
        let mut gen = Generator::new(42);
        let customers = gen.generate_customers(100);
        let sales = gen.generate_sales(&customers, 200);
        writer::write_customers(dir, &customers).unwrap();
        writer::write_sales(dir, &sales).unwrap();
    }

    let customers1 = std::fs::read(temp_dir1.path().join(CUSTOMERS_FILE)).unwrap();
    let customers2 = std::fs::read(temp_dir2.path().join(CUSTOMERS_FILE)).unwrap();
    assert_eq!(customers1, customers2);

    let sales1 = std::fs::read(temp_dir1.path().join(SALES_FILE)).unwrap();
    let sales2 = std::fs::read(temp_dir2.path().join(SALES_FILE)).unwrap();
    assert_eq!(sales1, sales2);
}

#[test]
fn test_zero_rows_header_only() {
    let temp_dir = TempDir::new().unwrap();

    let report = writer::write_customers(temp_dir.path(), &[]).unwrap();
    assert_eq!(report.rows, 0);
    let content = std::fs::read_to_string(&report.path).unwrap();
    assert_eq!(content, "customer_id,name,email,age,city,registration_date\n");

    let report = writer::write_sales(temp_dir.path(), &[]).unwrap();
    assert_eq!(report.rows, 0);
    let content = std::fs::read_to_string(&report.path).unwrap();
    assert_eq!(
        content,
        "sale_id,customer_id,product,category,amount,quantity,sale_date\n"
    );
}

#[test]
fn test_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CUSTOMERS_FILE), "old content").unwrap();

    let mut gen = Generator::new(42);
    let customers = gen.generate_customers(2);
    writer::write_customers(temp_dir.path(), &customers).unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join(CUSTOMERS_FILE)).unwrap();
    assert!(!content.contains("old content"));
    assert!(content.starts_with("customer_id,"));
}

#[test]
fn test_ensure_output_dir_creates_nested() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("exports").join("run1");

    writer::ensure_output_dir(&nested).unwrap();
    assert!(nested.is_dir());
}
