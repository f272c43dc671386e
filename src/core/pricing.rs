//! # Pricing
//!
//! Custom pizzas cost a base price for the size plus a flat amount per topping.
//!
//! ```text
//! Small  8.99   Medium 10.99   Large 12.99   (unknown size 0.00)
//! price = base + 0.50 * toppings
//! ```
//!
//! Pre-made pizzas carry their own catalog price and never come through here.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::pizza::{Size, ToppingSet};

/// Price of a single topping.
pub fn topping_price() -> Decimal {
    Decimal::new(50, 2)
}

pub fn base_price(size: Size) -> Decimal {
    match size {
        Size::Small => Decimal::new(899, 2),
        Size::Medium => Decimal::new(1099, 2),
        Size::Large => Decimal::new(1299, 2),
    }
}

pub fn price(size: Size, toppings: &ToppingSet) -> Decimal {
    base_price(size) + toppings_total(toppings)
}

/// Prices a pizza from a free-form size name.
///
/// Names that are not a known size contribute a zero base price.
pub fn price_for_size_name(size: &str, toppings: &ToppingSet) -> Decimal {
    let base = size.parse::<Size>().map(base_price).unwrap_or(Decimal::ZERO);
    base + toppings_total(toppings)
}

/// Rounds to whole cents, halves away from zero.
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn toppings_total(toppings: &ToppingSet) -> Decimal {
    topping_price() * Decimal::from(toppings.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toppings(names: &[&str]) -> ToppingSet {
        names.iter().copied().collect()
    }

    #[test]
    fn test_base_prices() {
        let none = ToppingSet::new();
        assert_eq!(price(Size::Small, &none), Decimal::new(899, 2));
        assert_eq!(price(Size::Medium, &none), Decimal::new(1099, 2));
        assert_eq!(price(Size::Large, &none), Decimal::new(1299, 2));
    }

    #[test]
    fn test_medium_with_two_toppings() {
        let p = price(Size::Medium, &toppings(&["Cheese", "Onions"]));
        assert_eq!(p, Decimal::new(1199, 2));
    }

    #[test]
    fn test_large_with_all_six_toppings() {
        let all = toppings(&["Cheese", "Pepperoni", "Mushrooms", "Onions", "Olives", "Sausage"]);
        assert_eq!(price(Size::Large, &all), Decimal::new(1599, 2));
    }

    #[test]
    fn test_each_topping_adds_fifty_cents() {
        for size in Size::ALL {
            let mut set = ToppingSet::new();
            for (count, name) in ["a", "b", "c", "d"].iter().enumerate() {
                set.insert(*name);
                let expected = base_price(size) + Decimal::new(50, 2) * Decimal::from(count + 1);
                assert_eq!(price(size, &set), expected);
            }
        }
    }

    #[test]
    fn test_known_size_name_matches_enum_price() {
        let set = toppings(&["Sausage"]);
        assert_eq!(price_for_size_name("Small", &set), price(Size::Small, &set));
    }

    #[test]
    fn test_unknown_size_name_is_toppings_only() {
        let set = toppings(&["Cheese", "Olives", "Onions"]);
        assert_eq!(price_for_size_name("Huge", &set), Decimal::new(150, 2));
        assert_eq!(price_for_size_name("", &ToppingSet::new()), Decimal::ZERO);
    }

    #[test]
    fn test_to_cents_rounds_half_up() {
        assert_eq!(to_cents(Decimal::new(1239, 3)), Decimal::new(124, 2));
        assert_eq!(to_cents(Decimal::new(9995, 3)), Decimal::new(1000, 2));
        assert_eq!(to_cents(Decimal::new(1234, 3)), Decimal::new(123, 2));
        assert_eq!(to_cents(Decimal::new(1199, 2)), Decimal::new(1199, 2));
    }
}
