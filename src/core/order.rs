//! # Order
//!
//! The in-progress order for the current session: who it is for, and the
//! pizzas added so far. Pizzas are only ever appended; the customer name is
//! replaced wholesale on every edit.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::pizza::Pizza;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Order {
    customer_name: String,
    pizzas: Vec<Pizza>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    /// Replaces the customer name. Empty and blank names are accepted here;
    /// they only block completing the order.
    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn add_pizza(&mut self, pizza: Pizza) {
        self.pizzas.push(pizza);
    }

    pub fn total(&self) -> Decimal {
        self.pizzas.iter().map(Pizza::price).sum()
    }

    /// Whether "complete order" is available: at least one pizza and a
    /// non-blank customer name.
    pub fn can_complete(&self) -> bool {
        !self.pizzas.is_empty() && !self.customer_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pizza::{Size, ToppingSet};

    fn pizza(name: &str, cents: i64) -> Pizza {
        Pizza::new(name, Size::Medium, ToppingSet::new(), Decimal::new(cents, 2))
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new();
        assert_eq!(order.customer_name(), "");
        assert!(order.pizzas().is_empty());
        assert_eq!(order.total(), Decimal::ZERO);
    }

    #[test]
    fn test_total_sums_prices() {
        let mut order = Order::new();
        order.add_pizza(pizza("Margherita", 999));
        order.add_pizza(pizza("Pepperoni", 1199));
        assert_eq!(order.total(), Decimal::new(2198, 2));
    }

    #[test]
    fn test_add_pizza_appends_in_order() {
        let mut order = Order::new();
        order.add_pizza(pizza("First", 100));
        let before = order.total();

        let second = pizza("Second", 1099);
        order.add_pizza(second.clone());

        assert_eq!(order.pizzas().len(), 2);
        assert_eq!(order.pizzas()[0].name(), "First");
        assert_eq!(order.pizzas()[1], second);
        assert_eq!(order.total() - before, second.price());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut order = Order::new();
        order.add_pizza(pizza("Margherita", 999));
        order.add_pizza(pizza("Margherita", 999));
        assert_eq!(order.pizzas().len(), 2);
    }

    #[test]
    fn test_set_customer_name_is_idempotent() {
        let mut order = Order::new();
        order.add_pizza(pizza("Margherita", 999));
        order.set_customer_name("Ana");
        order.set_customer_name("Ana");
        assert_eq!(order.customer_name(), "Ana");
        assert_eq!(order.pizzas().len(), 1);
    }

    #[test]
    fn test_can_complete_requires_name_and_pizza() {
        let mut order = Order::new();
        assert!(!order.can_complete());

        order.set_customer_name("Ana");
        assert!(!order.can_complete(), "no pizzas yet");

        order.add_pizza(pizza("Margherita", 999));
        assert!(order.can_complete());

        order.set_customer_name("");
        assert!(!order.can_complete(), "empty name");

        order.set_customer_name(" \t ");
        assert!(!order.can_complete(), "blank name");
    }
}
