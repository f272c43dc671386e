//! # Application State
//!
//! Core business state for one ordering session. Domain logic only, no
//! TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── order: Order                  // customer name + pizzas so far
//! ├── navigator: Navigator          // screen stack, FrontPage at the bottom
//! ├── draft: PizzaDraft             // custom pizza being built
//! ├── catalog: Vec<Pizza>           // pre-made pizzas
//! ├── shop_name: String             // shown in the title bar
//! ├── currency_symbol: String       // prefix for money
//! ├── receipt_date_format: String   // strftime format for the receipt stamp
//! ├── reset_order_after_receipt: bool
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use rust_decimal::Decimal;

use crate::core::catalog::CUSTOM_PIZZA_NAME;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{Navigator, Screen};
use crate::core::order::Order;
use crate::core::pizza::{Pizza, Size, ToppingSet};
use crate::core::pricing;

/// The custom pizza currently being assembled on the builder screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PizzaDraft {
    pub size: Option<Size>,
    pub toppings: ToppingSet,
}

impl PizzaDraft {
    /// Price the draft would have if added now. None until a size is picked.
    pub fn price(&self) -> Option<Decimal> {
        self.size.map(|size| pricing::price(size, &self.toppings))
    }

    /// Turns the draft into a pizza. Requires a selected size.
    pub fn build(&self) -> Option<Pizza> {
        let size = self.size?;
        Some(Pizza::new(
            CUSTOM_PIZZA_NAME,
            size,
            self.toppings.clone(),
            pricing::price(size, &self.toppings),
        ))
    }

    pub fn clear(&mut self) {
        *self = PizzaDraft::default();
    }
}

pub struct App {
    pub order: Order,
    pub navigator: Navigator,
    pub draft: PizzaDraft,
    pub catalog: Vec<Pizza>,
    pub shop_name: String,
    pub currency_symbol: String,
    pub receipt_date_format: String,
    /// Start a fresh order when leaving the receipt.
    pub reset_order_after_receipt: bool,
    pub status_message: String,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            order: Order::new(),
            navigator: Navigator::new(),
            draft: PizzaDraft::default(),
            catalog: config.catalog.clone(),
            shop_name: config.shop_name.clone(),
            currency_symbol: config.currency_symbol.clone(),
            receipt_date_format: config.receipt_date_format.clone(),
            reset_order_after_receipt: config.reset_order_after_receipt,
            status_message: format!("Welcome to {}!", config.shop_name),
        }
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Formats an amount with the configured currency symbol, e.g. `$11.99`.
    pub fn money(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.currency_symbol, pricing::to_cents(amount))
    }
}
