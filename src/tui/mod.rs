//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded: poll one terminal event, let the active screen turn it
//! into an `Action`, run `update()`, then drain whatever else is already
//! queued before drawing again. Nothing animates, so the loop only redraws
//! after an event arrived.

mod component;
pub mod components;
pub mod event;
mod ui;

use chrono::Local;
use log::{info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::receipt;
use crate::tui::components::{BuilderState, FrontPageState, PickerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long to block waiting for input when idle.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub front_page: FrontPageState,
    pub builder: BuilderState,
    pub picker: PickerState,
    /// Screen the per-screen states were last prepared for.
    shown_screen: Screen,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut tui = Self {
            front_page: FrontPageState::default(),
            builder: BuilderState::new(),
            picker: PickerState::new(),
            shown_screen: app.screen(),
        };
        tui.enter_screen(app);
        tui
    }

    /// Prepare the state of the screen that just became active.
    fn enter_screen(&mut self, app: &App) {
        self.shown_screen = app.screen();
        match app.screen() {
            Screen::FrontPage => self.front_page = FrontPageState::default(),
            Screen::CustomPizza => self.builder.reset(app.order.customer_name()),
            Screen::PreMadePizza => self.picker.reset(app.order.customer_name()),
            Screen::Receipt => {}
        }
    }
}

/// Route one event to the active screen and apply the resulting action.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let action = match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => Some(Action::Quit),
        _ => match app.screen() {
            Screen::FrontPage => tui.front_page.handle_event(&event),
            Screen::CustomPizza => tui.builder.handle_event(&event),
            Screen::PreMadePizza => tui.picker.handle_event(&event, &app.catalog),
            Screen::Receipt => receipt::handle_event(&event),
        },
    };

    let Some(action) = action else {
        return Effect::None;
    };
    let effect = update(app, action);
    if app.screen() != tui.shown_screen {
        tui.enter_screen(app);
    }
    effect
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app, &mut tui),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            event_loop(&mut terminal, &mut app, &mut tui)
        }
    };
    ratatui::restore();

    info!(
        "Exiting with {} pizzas in the order (total {})",
        app.order.pizzas().len(),
        app.order.total()
    );
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            let timestamp = receipt::format_timestamp(&Local::now(), &app.receipt_date_format);
            terminal.draw(|f| ui::draw_ui(f, app, tui, &timestamp))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = pending {
            needs_redraw = true;
            if handle_event(app, tui, event) == Effect::Quit {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use rust_decimal::Decimal;

    fn send(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Effect {
        let mut last = Effect::None;
        for event in events {
            last = handle_event(app, tui, event.clone());
        }
        last
    }

    fn type_text(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn test_force_quit_from_any_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        send(&mut app, &mut tui, &[TuiEvent::InputChar('c')]);
        assert_eq!(app.screen(), Screen::CustomPizza);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_custom_order_by_keyboard() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);

        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.screen(), Screen::CustomPizza);

        send(&mut app, &mut tui, &type_text("Ana"));
        assert_eq!(app.order.customer_name(), "Ana");

        // Name → Size, pick Medium, down to toppings, toggle Cheese, add
        send(
            &mut app,
            &mut tui,
            &[
                TuiEvent::Submit,
                TuiEvent::CursorRight,
                TuiEvent::CursorDown,
                TuiEvent::InputChar(' '),
                TuiEvent::Submit,
            ],
        );
        assert_eq!(app.order.pizzas().len(), 1);
        assert_eq!(app.order.total(), Decimal::new(1149, 2));

        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::CompleteOrder]), Effect::None);
        assert_eq!(app.screen(), Screen::Receipt);

        send(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(app.screen(), Screen::FrontPage);
        assert_eq!(app.navigator.depth(), 1);
    }

    #[test]
    fn test_complete_without_name_is_unavailable() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        send(&mut app, &mut tui, &[TuiEvent::InputChar('p')]);
        // Name field is focused first when the order has no name yet
        send(&mut app, &mut tui, &[TuiEvent::Tab, TuiEvent::Submit]);
        assert_eq!(app.order.pizzas().len(), 1);
        assert_eq!(
            send(&mut app, &mut tui, &[TuiEvent::CompleteOrder]),
            Effect::Unavailable
        );
        assert_eq!(app.screen(), Screen::PreMadePizza);
    }

    #[test]
    fn test_name_prefilled_on_return() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        send(&mut app, &mut tui, &[TuiEvent::InputChar('p')]);
        send(&mut app, &mut tui, &type_text("Bo"));
        send(&mut app, &mut tui, &[TuiEvent::Escape, TuiEvent::InputChar('c')]);
        assert_eq!(tui.builder.name.buffer, "Bo");
    }
}
