//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! Picking "Medium"? That's `Action::SelectSize(Size::Medium)`.
//! Pressing Ctrl+O? That's `Action::CompleteOrder`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what else to do.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! An action that is not available right now (completing an empty order,
//! going back from the front page) leaves the state untouched and returns
//! `Effect::Unavailable`. That is the adapter's cue to keep the button
//! greyed out, not an error.

use log::{debug, info, warn};

use crate::core::navigation::Screen;
use crate::core::order::Order;
use crate::core::pizza::{Pizza, Size};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Forward move from the front page, or `FrontPage` to jump to the root.
    NavigateTo(Screen),
    SetCustomerName(String),
    SelectSize(Size),
    ToggleTopping(String),
    /// Add the custom pizza being built. Needs a selected size.
    AddDraftPizza,
    /// Add a ready-made pizza (from the catalog).
    AddPizza(Pizza),
    CompleteOrder,
    GoBack,
    GoToMenu,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Unavailable,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::NavigateTo(Screen::FrontPage) | Action::GoToMenu => {
            let from = app.screen();
            if app.navigator.go_to_root() {
                screen_changed(app, from);
                Effect::None
            } else {
                Effect::Unavailable
            }
        }
        Action::NavigateTo(Screen::Receipt) | Action::CompleteOrder => complete_order(app),
        Action::NavigateTo(screen) => {
            let from = app.screen();
            if app.navigator.advance(screen, &app.order) {
                screen_changed(app, from);
                Effect::None
            } else {
                warn!("No transition from {:?} to {:?}", from, screen);
                Effect::Unavailable
            }
        }
        Action::SetCustomerName(name) => {
            app.order.set_customer_name(name);
            Effect::None
        }
        Action::SelectSize(size) => {
            app.draft.size = Some(size);
            Effect::None
        }
        Action::ToggleTopping(topping) => {
            app.draft.toppings.toggle(&topping);
            Effect::None
        }
        Action::AddDraftPizza => match app.draft.build() {
            Some(pizza) => {
                add_pizza(app, pizza);
                app.draft.clear();
                Effect::None
            }
            None => {
                app.status_message = String::from("Pick a size first");
                Effect::Unavailable
            }
        },
        Action::AddPizza(pizza) => {
            add_pizza(app, pizza);
            Effect::None
        }
        Action::GoBack => {
            let from = app.screen();
            if app.navigator.go_back() {
                screen_changed(app, from);
                Effect::None
            } else {
                Effect::Unavailable
            }
        }
        Action::Quit => Effect::Quit,
    }
}

fn add_pizza(app: &mut App, pizza: Pizza) {
    info!(
        "Added {} {} pizza ({})",
        pizza.size(),
        pizza.name(),
        pizza.price()
    );
    app.status_message = format!(
        "Added {} {} ({})",
        pizza.size(),
        pizza.name(),
        app.money(pizza.price())
    );
    app.order.add_pizza(pizza);
}

fn complete_order(app: &mut App) -> Effect {
    let from = app.screen();
    if !app.navigator.advance(Screen::Receipt, &app.order) {
        warn!(
            "Complete order unavailable on {:?} ({} pizzas, name blank: {})",
            from,
            app.order.pizzas().len(),
            app.order.customer_name().trim().is_empty()
        );
        return Effect::Unavailable;
    }

    match serde_json::to_string(&app.order) {
        Ok(json) => info!("Order completed: {}", json),
        Err(e) => warn!("Failed to serialize completed order: {}", e),
    }
    screen_changed(app, from);
    Effect::None
}

/// Bookkeeping shared by every successful screen change.
fn screen_changed(app: &mut App, from: Screen) {
    let to = app.screen();
    info!("Screen {:?} -> {:?}", from, to);

    app.draft.clear();

    if from == Screen::Receipt && app.reset_order_after_receipt {
        info!("Starting a fresh order");
        app.order = Order::new();
    }

    app.status_message = match to {
        Screen::FrontPage => format!("Welcome to {}!", app.shop_name),
        Screen::CustomPizza => String::from("Build your pizza"),
        Screen::PreMadePizza => String::from("Pick from our pizzas"),
        Screen::Receipt => String::from("Thank you for your order!"),
    };
}
