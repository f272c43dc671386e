//! # Menu & Catalog
//!
//! What the shop offers: the topping menu for custom pizzas and the list of
//! pre-made pizzas with fixed prices. The pre-made list can be replaced from
//! the config file (`[[catalog]]` entries).

use log::warn;
use rust_decimal::Decimal;

use crate::core::config::CatalogEntry;
use crate::core::pizza::{Pizza, Size, ToppingSet};
use crate::core::pricing;

/// Toppings offered in the custom-pizza builder, in display order.
pub const TOPPINGS: [&str; 6] = ["Cheese", "Pepperoni", "Mushrooms", "Onions", "Olives", "Sausage"];

/// Name given to every pizza built in the custom flow.
pub const CUSTOM_PIZZA_NAME: &str = "Custom";

pub fn default_catalog() -> Vec<Pizza> {
    vec![
        Pizza::new(
            "Margherita",
            Size::Medium,
            ["Cheese", "Tomato"].into_iter().collect(),
            Decimal::new(999, 2),
        ),
        Pizza::new(
            "Pepperoni",
            Size::Medium,
            ["Cheese", "Pepperoni"].into_iter().collect(),
            Decimal::new(1199, 2),
        ),
        Pizza::new(
            "Vegetarian",
            Size::Medium,
            ["Cheese", "Mushrooms", "Onions", "Olives"].into_iter().collect(),
            Decimal::new(1099, 2),
        ),
    ]
}

/// Builds the pre-made list from config entries.
///
/// Entries with an unknown size are skipped. Prices are rounded to whole
/// cents. If nothing usable remains the built-in catalog is returned.
pub fn catalog_from_entries(entries: &[CatalogEntry]) -> Vec<Pizza> {
    let pizzas: Vec<Pizza> = entries
        .iter()
        .filter_map(|entry| match entry.size.parse::<Size>() {
            Ok(size) => Some(Pizza::new(
                entry.name.clone(),
                size,
                entry.toppings.iter().cloned().collect::<ToppingSet>(),
                pricing::to_cents(entry.price),
            )),
            Err(e) => {
                warn!("Skipping catalog entry '{}': {}", entry.name, e);
                None
            }
        })
        .collect();

    if pizzas.is_empty() {
        if !entries.is_empty() {
            warn!("No usable catalog entries in config, using built-in catalog");
        }
        return default_catalog();
    }
    pizzas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size: &str, cents: i64) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            size: size.to_string(),
            toppings: vec!["Cheese".to_string()],
            price: Decimal::new(cents, 2),
        }
    }

    #[test]
    fn test_default_catalog_prices() {
        let catalog = default_catalog();
        let summary: Vec<(&str, Decimal)> =
            catalog.iter().map(|p| (p.name(), p.price())).collect();
        assert_eq!(
            summary,
            vec![
                ("Margherita", Decimal::new(999, 2)),
                ("Pepperoni", Decimal::new(1199, 2)),
                ("Vegetarian", Decimal::new(1099, 2)),
            ]
        );
        assert_eq!(catalog[2].toppings().joined(), "Cheese, Mushrooms, Onions, Olives");
    }

    #[test]
    fn test_catalog_from_entries_skips_unknown_sizes() {
        let entries = vec![entry("Hawaiian", "Large", 1399), entry("Giant", "XXL", 2000)];
        let catalog = catalog_from_entries(&entries);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name(), "Hawaiian");
        assert_eq!(catalog[0].size(), Size::Large);
        assert_eq!(catalog[0].price(), Decimal::new(1399, 2));
    }

    #[test]
    fn test_catalog_prices_rounded_to_cents() {
        let mut odd = entry("Calzone", "Medium", 0);
        odd.price = Decimal::new(1239, 3);
        let catalog = catalog_from_entries(&[odd]);
        assert_eq!(catalog[0].price(), Decimal::new(124, 2));
    }

    #[test]
    fn test_catalog_from_entries_falls_back_when_empty() {
        assert_eq!(catalog_from_entries(&[]), default_catalog());
        assert_eq!(catalog_from_entries(&[entry("Giant", "XXL", 2000)]), default_catalog());
    }
}
