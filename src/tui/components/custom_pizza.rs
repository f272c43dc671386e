//! # Custom Pizza Builder
//!
//! Name field, size radio row, toppings checklist and the running order.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BuilderState` lives in `TuiState` (focus and highlight positions)
//! - `CustomPizzaScreen` is created each frame with borrowed state
//!
//! The selected size and toppings themselves live in the core
//! (`App::draft`); this component only turns keys into actions.
//!
//! Keys: Tab/Shift+Tab move focus, ←→ pick a size, ↑↓ + Space toggle a
//! topping, Enter adds the pizza, Ctrl+O completes the order, Esc goes back.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::action::Action;
use crate::core::catalog::TOPPINGS;
use crate::core::pizza::Size;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::name_input::{NameEvent, NameInput};
use crate::tui::components::order_lines::{LineStyle, OrderLines};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderFocus {
    Name,
    Size,
    Toppings,
}

impl BuilderFocus {
    fn next(self) -> Self {
        match self {
            BuilderFocus::Name => BuilderFocus::Size,
            BuilderFocus::Size => BuilderFocus::Toppings,
            BuilderFocus::Toppings => BuilderFocus::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            BuilderFocus::Name => BuilderFocus::Toppings,
            BuilderFocus::Size => BuilderFocus::Name,
            BuilderFocus::Toppings => BuilderFocus::Size,
        }
    }
}

pub struct BuilderState {
    pub focus: BuilderFocus,
    pub name: NameInput,
    /// Size under the cursor in the radio row.
    pub size_cursor: Size,
    /// Index into `TOPPINGS` under the cursor.
    pub topping_cursor: usize,
}

impl BuilderState {
    pub fn new() -> Self {
        Self {
            focus: BuilderFocus::Name,
            name: NameInput::new(),
            size_cursor: Size::Small,
            topping_cursor: 0,
        }
    }

    /// Reset for a fresh visit, prefilled with the order's customer name.
    pub fn reset(&mut self, customer_name: &str) {
        *self = Self::new();
        self.name.set_text(customer_name);
    }

    fn set_focus(&mut self, focus: BuilderFocus) {
        self.focus = focus;
        self.name.focused = focus == BuilderFocus::Name;
    }
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for BuilderState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Escape => return Some(Action::GoBack),
            TuiEvent::CompleteOrder => return Some(Action::CompleteOrder),
            TuiEvent::Tab => {
                self.set_focus(self.focus.next());
                return None;
            }
            TuiEvent::BackTab => {
                self.set_focus(self.focus.prev());
                return None;
            }
            _ => {}
        }

        match self.focus {
            BuilderFocus::Name => match self.name.handle_event(event)? {
                NameEvent::Changed(text) => Some(Action::SetCustomerName(text)),
                NameEvent::Submit => {
                    self.set_focus(BuilderFocus::Size);
                    None
                }
            },
            BuilderFocus::Size => match event {
                TuiEvent::CursorLeft => {
                    self.size_cursor = self.size_cursor.step(-1);
                    Some(Action::SelectSize(self.size_cursor))
                }
                TuiEvent::CursorRight => {
                    self.size_cursor = self.size_cursor.step(1);
                    Some(Action::SelectSize(self.size_cursor))
                }
                TuiEvent::InputChar(' ') => Some(Action::SelectSize(self.size_cursor)),
                TuiEvent::CursorDown => {
                    self.set_focus(BuilderFocus::Toppings);
                    None
                }
                TuiEvent::Submit => Some(Action::AddDraftPizza),
                _ => None,
            },
            BuilderFocus::Toppings => match event {
                TuiEvent::CursorUp => {
                    if self.topping_cursor == 0 {
                        self.set_focus(BuilderFocus::Size);
                    } else {
                        self.topping_cursor -= 1;
                    }
                    None
                }
                TuiEvent::CursorDown => {
                    self.topping_cursor = (self.topping_cursor + 1).min(TOPPINGS.len() - 1);
                    None
                }
                TuiEvent::InputChar(' ') => TOPPINGS
                    .get(self.topping_cursor)
                    .map(|t| Action::ToggleTopping(t.to_string())),
                TuiEvent::Submit => Some(Action::AddDraftPizza),
                _ => None,
            },
        }
    }
}

/// Transient render wrapper for the builder screen.
pub struct CustomPizzaScreen<'a> {
    state: &'a mut BuilderState,
    app: &'a App,
}

impl<'a> CustomPizzaScreen<'a> {
    pub fn new(state: &'a mut BuilderState, app: &'a App) -> Self {
        Self { state, app }
    }

    fn section_block(&self, title: &'static str, focus: BuilderFocus) -> Block<'static> {
        let border = if self.state.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(title)
    }

    fn render_sizes(&self, frame: &mut Frame, area: Rect) {
        let focused = self.state.focus == BuilderFocus::Size;
        let mut spans = Vec::new();
        for size in Size::ALL {
            let selected = self.app.draft.size == Some(size);
            let marker = if selected { "(•) " } else { "( ) " };
            let mut style = Style::default().fg(if selected { Color::Green } else { Color::Gray });
            if focused && size == self.state.size_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{marker}{}", size.label()), style));
            spans.push(Span::raw("   "));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .block(self.section_block("Pizza Size", BuilderFocus::Size));
        frame.render_widget(paragraph, area);
    }

    fn render_toppings(&self, frame: &mut Frame, area: Rect) {
        let focused = self.state.focus == BuilderFocus::Toppings;
        let lines: Vec<Line> = TOPPINGS
            .iter()
            .enumerate()
            .map(|(i, topping)| {
                let checked = self.app.draft.toppings.contains(topping);
                let marker = if checked { "[x] " } else { "[ ] " };
                let mut style =
                    Style::default().fg(if checked { Color::Green } else { Color::Gray });
                if focused && i == self.state.topping_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(format!("{marker}{topping}"), style))
            })
            .collect();

        let price_label = match self.app.draft.price() {
            Some(price) => format!(" Enter Add Pizza ({}) ", self.app.money(price)),
            None => String::from(" Pick a size to add "),
        };
        let block = self
            .section_block("Toppings", BuilderFocus::Toppings)
            .title_bottom(Line::from(price_label).right_aligned());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for CustomPizzaScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [name_area, size_area, toppings_area, order_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(TOPPINGS.len() as u16 + 2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        self.state.name.focused = self.state.focus == BuilderFocus::Name;
        self.state.name.render(frame, name_area);
        self.render_sizes(frame, size_area);
        self.render_toppings(frame, toppings_area);
        OrderLines::new(self.app, LineStyle::WithToppings).render(frame, order_area);

        let help = Paragraph::new(Span::styled(
            "Tab Focus  ←→ Size  ↑↓ Move  Space Toggle  Enter Add  Ctrl+O Complete  Esc Back",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(help, help_area);
    }
}
