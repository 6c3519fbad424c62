//! Product catalog shared by sales generation.

use std::fmt;

/// Product category with a fixed retail price band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Office,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Office => "Office",
        }
    }

    /// Price band (min, max) sale amounts are drawn from
    pub fn price_band(&self) -> (f64, f64) {
        match self {
            Category::Electronics => (200.0, 1500.0),
            Category::Clothing => (20.0, 200.0),
            Category::Home => (30.0, 300.0),
            Category::Office => (5.0, 50.0),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The sixteen products sales are drawn from, each mapped to its category
pub const PRODUCTS: &[(&str, Category)] = &[
    ("Laptop", Category::Electronics),
    ("Smartphone", Category::Electronics),
    ("Headphones", Category::Electronics),
    ("Tablet", Category::Electronics),
    ("T-Shirt", Category::Clothing),
    ("Jeans", Category::Clothing),
    ("Sneakers", Category::Clothing),
    ("Jacket", Category::Clothing),
    ("Coffee Maker", Category::Home),
    ("Blender", Category::Home),
    ("Desk Lamp", Category::Home),
    ("Book Shelf", Category::Home),
    ("Notebook", Category::Office),
    ("Pen Set", Category::Office),
    ("Desk Organizer", Category::Office),
    ("Stapler", Category::Office),
];
