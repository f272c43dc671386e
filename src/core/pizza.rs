//! # Pizza Model
//!
//! The value types an order is made of.
//!
//! ```text
//! Pizza
//! ├── name: String          // "Custom", "Margherita", ...
//! ├── size: Size            // Small | Medium | Large
//! ├── toppings: ToppingSet  // unique, insertion-ordered
//! └── price: Decimal        // fixed at creation
//! ```
//!
//! A `Pizza` never changes after it is built. Orders only ever append them.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// All sizes, in the order the builder offers them.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    /// The size one step to the left/right in `ALL`, clamped at the ends.
    pub fn step(self, delta: isize) -> Size {
        let index = Size::ALL.iter().position(|s| *s == self).unwrap_or(0) as isize;
        let next = (index + delta).clamp(0, Size::ALL.len() as isize - 1);
        Size::ALL[next as usize]
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a size name is not one of Small/Medium/Large.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSize(pub String);

impl fmt::Display for UnknownSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pizza size: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSize {}

impl FromStr for Size {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Small" => Ok(Size::Small),
            "Medium" => Ok(Size::Medium),
            "Large" => Ok(Size::Large),
            other => Err(UnknownSize(other.to_string())),
        }
    }
}

/// A set of topping names that remembers the order they were added in.
///
/// Menus are short, so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToppingSet(Vec<String>);

impl ToppingSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, topping: &str) -> bool {
        self.0.iter().any(|t| t == topping)
    }

    /// Adds `topping` if absent. Returns true if the set changed.
    pub fn insert(&mut self, topping: impl Into<String>) -> bool {
        let topping = topping.into();
        if self.contains(&topping) {
            return false;
        }
        self.0.push(topping);
        true
    }

    /// Adds `topping` if absent, removes it otherwise.
    /// Returns true if the topping is selected afterwards.
    pub fn toggle(&mut self, topping: &str) -> bool {
        if let Some(index) = self.0.iter().position(|t| t == topping) {
            self.0.remove(index);
            false
        } else {
            self.0.push(topping.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-separated list, as shown on order lines and the receipt.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl<S: Into<String>> FromIterator<S> for ToppingSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ToppingSet::new();
        for topping in iter {
            set.insert(topping);
        }
        set
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pizza {
    name: String,
    size: Size,
    toppings: ToppingSet,
    price: Decimal,
}

impl Pizza {
    pub fn new(name: impl Into<String>, size: Size, toppings: ToppingSet, price: Decimal) -> Self {
        Self {
            name: name.into(),
            size,
            toppings,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn toppings(&self) -> &ToppingSet {
        &self.toppings
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}
