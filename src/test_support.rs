//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rust_decimal::Decimal;

use crate::core::config::ResolvedConfig;
use crate::core::pizza::{Pizza, Size};
use crate::core::state::App;

/// Creates a test App with the built-in catalog and a fixed shop name.
pub fn test_app() -> App {
    let config = ResolvedConfig {
        shop_name: "Test Pizzeria".to_string(),
        ..ResolvedConfig::default()
    };
    App::from_config(&config)
}

pub fn margherita() -> Pizza {
    Pizza::new(
        "Margherita",
        Size::Medium,
        ["Cheese", "Tomato"].into_iter().collect(),
        Decimal::new(999, 2),
    )
}
