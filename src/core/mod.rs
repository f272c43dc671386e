//! # Core Application Logic
//!
//! This module contains the ordering logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Order, Pizza, price  │
//!                    │  • Navigator (screens)  │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pizza`]: `Pizza`, `Size`, `ToppingSet`
//! - [`pricing`]: the custom-pizza price rule
//! - [`order`]: the in-progress `Order`
//! - [`catalog`]: topping menu and pre-made pizzas
//! - [`navigation`]: `Screen` and the `Navigator` stack
//! - [`state`]: the `App` struct, all session state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod order;
pub mod pizza;
pub mod pricing;
pub mod state;
