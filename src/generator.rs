//! Record generation for the customer and sales datasets.
//!
//! Produces deterministic, reference-consistent records from a seeded RNG.

use crate::catalog::{Category, PRODUCTS};
use crate::fake::FakeData;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed used when none is supplied
pub const DEFAULT_SEED: u64 = 42;

/// Customer count for a default run
pub const DEFAULT_CUSTOMER_COUNT: usize = 10_000;

/// Sales count for a default run
pub const DEFAULT_SALES_COUNT: usize = 50_000;

/// One generated customer row
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub city: &'static str,
    pub registration_date: NaiveDateTime,
}

/// One generated sale row
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub sale_id: i64,
    pub customer_id: i64,
    pub product: &'static str,
    pub category: Category,
    pub amount: f64,
    pub quantity: i32,
    pub sale_date: NaiveDateTime,
}

/// Day window customer registration dates are drawn from (inclusive)
pub fn registration_window() -> (NaiveDate, NaiveDate) {
    (date(2020, 1, 1), date(2024, 1, 1))
}

/// Day window sale timestamps are drawn from (inclusive)
pub fn sales_window() -> (NaiveDate, NaiveDate) {
    (date(2023, 1, 1), date(2024, 1, 1))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Main data generator
pub struct Generator {
    fake: FakeData<ChaCha8Rng>,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self {
            fake: FakeData::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Generate `count` customers with sequential ids starting at 1
    pub fn generate_customers(&mut self, count: usize) -> Vec<Customer> {
        let (start, end) = registration_window();
        (1..=count as i64)
            .map(|id| {
                let first = self.fake.first_name();
                let last = self.fake.last_name();
                let email = self.fake.email(first, last, "example.com");
                let name = format!("{} {}", first, last);

                Customer {
                    customer_id: id,
                    name,
                    email,
                    age: self.fake.int_range(18, 80) as i32,
                    city: self.fake.city(),
                    registration_date: self
                        .fake
                        .date_between(start, end)
                        .and_time(NaiveTime::MIN),
                }
            })
            .collect()
    }

    /// Generate `count` sales with sequential ids starting at 1, each
    /// referencing a customer id drawn from `customers`.
    ///
    /// Panics if `customers` is empty while `count` is nonzero; callers
    /// must generate customers first.
    pub fn generate_sales(&mut self, customers: &[Customer], count: usize) -> Vec<Sale> {
        let customer_ids: Vec<i64> = customers.iter().map(|c| c.customer_id).collect();
        let (start, end) = sales_window();
        (1..=count as i64)
            .map(|id| {
                let (product, category) = *self.fake.pick(PRODUCTS);
                let (min_price, max_price) = category.price_band();

                Sale {
                    sale_id: id,
                    customer_id: self.fake.pick_id(&customer_ids),
                    product,
                    category,
                    amount: self.fake.price(min_price, max_price),
                    quantity: self.fake.int_range(1, 5) as i32,
                    sale_date: self.fake.datetime_between(start, end),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_deterministic() {
        let mut gen1 = Generator::new(42);
        let mut gen2 = Generator::new(42);

        let customers1 = gen1.generate_customers(50);
        let customers2 = gen2.generate_customers(50);
        assert_eq!(customers1, customers2);

        let sales1 = gen1.generate_sales(&customers1, 100);
        let sales2 = gen2.generate_sales(&customers2, 100);
        assert_eq!(sales1, sales2);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = Generator::new(42);
        let customers = gen.generate_customers(5);
        let ids: Vec<i64> = customers.iter().map(|c| c.customer_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let sales = gen.generate_sales(&customers, 20);
        assert_eq!(sales.len(), 20);
        let sale_ids: Vec<i64> = sales.iter().map(|s| s.sale_id).collect();
        assert_eq!(sale_ids, (1..=20).collect::<Vec<i64>>());
    }

    #[test]
    fn test_fk_consistency() {
        let mut gen = Generator::new(42);
        let customers = gen.generate_customers(5);
        let customer_ids: Vec<i64> = customers.iter().map(|c| c.customer_id).collect();

        let sales = gen.generate_sales(&customers, 20);
        for sale in &sales {
            assert!(
                customer_ids.contains(&sale.customer_id),
                "Sale references non-existent customer"
            );
        }
    }

    #[test]
    fn test_empty_counts() {
        let mut gen = Generator::new(42);
        let customers = gen.generate_customers(0);
        assert!(customers.is_empty());

        let sales = gen.generate_sales(&customers, 0);
        assert!(sales.is_empty());
    }
}
