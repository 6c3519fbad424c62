//! Fake data sampling helpers.
//!
//! Deterministic building blocks for names, emails, prices, and dates.
//! All randomness comes from the RNG handed to `FakeData`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

/// First names for generated customers
const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
];

/// Last names for generated customers
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez",
];

/// Cities customers can be registered in
const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];

/// Fake data generator with deterministic RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a random first name
    pub fn first_name(&mut self) -> &'static str {
        FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())]
    }

    /// Generate a random last name
    pub fn last_name(&mut self) -> &'static str {
        LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())]
    }

    /// Generate an email address
    pub fn email(&mut self, first: &str, last: &str, domain: &str) -> String {
        let num: u32 = self.rng.random_range(1..1000);
        format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            num,
            domain
        )
    }

    /// Generate a random city
    pub fn city(&mut self) -> &'static str {
        CITIES[self.rng.random_range(0..CITIES.len())]
    }

    /// Generate a price with at most two decimal places
    pub fn price(&mut self, min: f64, max: f64) -> f64 {
        let value = self.rng.random_range(min..max);
        (value * 100.0).round() / 100.0
    }

    /// Generate a random integer in range (inclusive)
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Generate a date between two dates, inclusive on both ends
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let days = (end - start).num_days();
        start + Duration::days(self.rng.random_range(0..=days))
    }

    /// Generate a timestamp on a date between two dates, with a random
    /// hour and minute and seconds fixed at zero
    pub fn datetime_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDateTime {
        let date = self.date_between(start, end);
        let hour = self.rng.random_range(0..24);
        let minute = self.rng.random_range(0..60);
        date.and_time(NaiveTime::MIN) + Duration::hours(hour) + Duration::minutes(minute)
    }

    /// Pick a random element from a slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }

    /// Pick a random id from a non-empty slice, returning the value
    pub fn pick_id(&mut self, ids: &[i64]) -> i64 {
        ids[self.rng.random_range(0..ids.len())]
    }
}
