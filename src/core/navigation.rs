//! # Navigation
//!
//! Which screen is active, kept as a stack of visited screens.
//!
//! ```text
//!                ┌── choose custom ──▶ CustomPizza ──┐
//!   FrontPage ───┤                                   ├── complete order ──▶ Receipt
//!      ▲         └── choose pre-made ▶ PreMadePizza ─┘        (guarded)       │
//!      └───────────────────────── go back / go to menu ───────────────────────┘
//! ```
//!
//! The stack is never empty and `FrontPage` is always at the bottom.
//! Forward moves push, back pops, and leaving the receipt truncates to the
//! root. Moves that are not on the diagram are refused by returning `false`.

use crate::core::order::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    FrontPage,
    CustomPizza,
    PreMadePizza,
    Receipt,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::FrontPage => "Menu",
            Screen::CustomPizza => "Custom Pizza",
            Screen::PreMadePizza => "Pre-made Pizzas",
            Screen::Receipt => "Receipt",
        }
    }

    /// Whether a forward move from `self` to `next` exists.
    pub fn leads_to(self, next: Screen) -> bool {
        matches!(
            (self, next),
            (Screen::FrontPage, Screen::CustomPizza)
                | (Screen::FrontPage, Screen::PreMadePizza)
                | (Screen::CustomPizza, Screen::Receipt)
                | (Screen::PreMadePizza, Screen::Receipt)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::FrontPage],
        }
    }

    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Visited screens, root first.
    pub fn history(&self) -> &[Screen] {
        &self.stack
    }

    /// Moves forward to `next` if the diagram allows it. Entering the
    /// receipt additionally requires `order.can_complete()`.
    pub fn advance(&mut self, next: Screen, order: &Order) -> bool {
        if !self.current().leads_to(next) {
            return false;
        }
        if next == Screen::Receipt && !order.can_complete() {
            return false;
        }
        self.stack.push(next);
        true
    }

    /// Goes back one step. From the receipt this returns to the root.
    /// There is nothing behind the front page.
    pub fn go_back(&mut self) -> bool {
        match self.current() {
            Screen::FrontPage => false,
            Screen::Receipt => self.go_to_root(),
            Screen::CustomPizza | Screen::PreMadePizza => {
                self.stack.pop();
                true
            }
        }
    }

    /// Drops everything above the front page. Returns false if already there.
    pub fn go_to_root(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.truncate(1);
        true
    }
}
