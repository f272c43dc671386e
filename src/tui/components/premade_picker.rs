//! # Pre-made Pizza Picker
//!
//! Name field, the catalog of ready-made pizzas, and the running order.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PickerState` lives in `TuiState`
//! - `PreMadePizzaScreen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::core::action::Action;
use crate::core::pizza::Pizza;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::name_input::{NameEvent, NameInput};
use crate::tui::components::order_lines::{LineStyle, OrderLines};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerFocus {
    Name,
    Catalog,
}

/// Persistent state for the picker screen.
pub struct PickerState {
    pub focus: PickerFocus,
    pub name: NameInput,
    pub selected: usize,
    pub list_state: ListState,
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            focus: PickerFocus::Catalog,
            name: NameInput::new(),
            selected: 0,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    /// Reset for a fresh visit, prefilled with the order's customer name.
    /// Starts on the name field when no name has been entered yet.
    pub fn reset(&mut self, customer_name: &str) {
        *self = Self::new();
        self.name.set_text(customer_name);
        if customer_name.trim().is_empty() {
            self.focus = PickerFocus::Name;
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PickerFocus::Name => PickerFocus::Catalog,
            PickerFocus::Catalog => PickerFocus::Name,
        };
    }

    /// Handle a key event. `catalog` is the list being shown, needed to
    /// turn Enter into the pizza under the cursor.
    pub fn handle_event(&mut self, event: &TuiEvent, catalog: &[Pizza]) -> Option<Action> {
        match event {
            TuiEvent::Escape => return Some(Action::GoBack),
            TuiEvent::CompleteOrder => return Some(Action::CompleteOrder),
            TuiEvent::Tab | TuiEvent::BackTab => {
                self.toggle_focus();
                return None;
            }
            _ => {}
        }

        match self.focus {
            PickerFocus::Name => match self.name.handle_event(event)? {
                NameEvent::Changed(text) => Some(Action::SetCustomerName(text)),
                NameEvent::Submit => {
                    self.focus = PickerFocus::Catalog;
                    None
                }
            },
            PickerFocus::Catalog => match event {
                TuiEvent::CursorUp => {
                    if !catalog.is_empty() {
                        self.selected = self.selected.saturating_sub(1);
                        self.list_state.select(Some(self.selected));
                    }
                    None
                }
                TuiEvent::CursorDown => {
                    if !catalog.is_empty() {
                        self.selected = (self.selected + 1).min(catalog.len() - 1);
                        self.list_state.select(Some(self.selected));
                    }
                    None
                }
                TuiEvent::Submit | TuiEvent::InputChar(' ') => catalog
                    .get(self.selected)
                    .map(|pizza| Action::AddPizza(pizza.clone())),
                _ => None,
            },
        }
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the picker screen.
pub struct PreMadePizzaScreen<'a> {
    state: &'a mut PickerState,
    app: &'a App,
}

impl<'a> PreMadePizzaScreen<'a> {
    pub fn new(state: &'a mut PickerState, app: &'a App) -> Self {
        Self { state, app }
    }

    fn render_catalog(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.state.focus == PickerFocus::Catalog;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(" Pre-made Pizzas ")
            .title_bottom(Line::from(" Enter Add to Order ").centered());

        let items: Vec<ListItem> = self
            .app
            .catalog
            .iter()
            .map(|pizza| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        pizza.name().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("  Toppings: {}", pizza.toppings().joined()),
                        Style::default().fg(Color::Gray),
                    )),
                    Line::from(Span::styled(
                        format!("  {} · Price: {}", pizza.size(), self.app.money(pizza.price())),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let highlight = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl Component for PreMadePizzaScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let catalog_height = (self.app.catalog.len() as u16 * 3 + 2).min(area.height / 2);
        let [name_area, catalog_area, order_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(catalog_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        self.state.name.focused = self.state.focus == PickerFocus::Name;
        self.state.name.render(frame, name_area);
        self.render_catalog(frame, catalog_area);
        OrderLines::new(self.app, LineStyle::Plain).render(frame, order_area);

        let help = Paragraph::new(Span::styled(
            "Tab Focus  ↑↓ Move  Enter Add  Ctrl+O Complete  Esc Back",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(help, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::default_catalog;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_enter_adds_pizza_under_cursor() {
        let catalog = default_catalog();
        let mut state = PickerState::new();
        state.handle_event(&TuiEvent::CursorDown, &catalog);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &catalog),
            Some(Action::AddPizza(catalog[1].clone()))
        );
    }

    #[test]
    fn test_cursor_clamps_to_catalog() {
        let catalog = default_catalog();
        let mut state = PickerState::new();
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown, &catalog);
        }
        assert_eq!(state.selected, 2);
        assert_eq!(state.list_state.selected(), Some(2));
        state.handle_event(&TuiEvent::CursorUp, &catalog);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_reset_focuses_name_when_blank() {
        let mut state = PickerState::new();
        state.reset("");
        assert_eq!(state.focus, PickerFocus::Name);
        state.reset("Ana");
        assert_eq!(state.focus, PickerFocus::Catalog);
        assert_eq!(state.name.buffer, "Ana");
    }

    #[test]
    fn test_name_then_submit_moves_to_catalog() {
        let catalog = default_catalog();
        let mut state = PickerState::new();
        state.reset("");
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('B'), &catalog),
            Some(Action::SetCustomerName("B".into()))
        );
        assert_eq!(state.handle_event(&TuiEvent::Submit, &catalog), None);
        assert_eq!(state.focus, PickerFocus::Catalog);
    }

    #[test]
    fn test_empty_catalog_adds_nothing() {
        let mut state = PickerState::new();
        state.handle_event(&TuiEvent::CursorDown, &[]);
        assert_eq!(state.handle_event(&TuiEvent::Submit, &[]), None);
    }

    #[test]
    fn test_render_picker_screen() {
        let app = test_app();
        let mut state = PickerState::new();

        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| PreMadePizzaScreen::new(&mut state, &app).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Margherita"));
        assert!(text.contains("Toppings: Cheese, Mushrooms, Onions, Olives"));
        assert!(text.contains("Price: $11.99"));
        assert!(text.contains("No pizzas yet"));
    }
}
