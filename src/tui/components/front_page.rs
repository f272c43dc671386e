//! # Front Page Component
//!
//! Welcome banner plus the two ways to start an order.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::action::Action;
use crate::core::navigation::Screen;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Menu entries in display order, with their shortcut key.
const ENTRIES: [(&str, char, Screen); 2] = [
    ("Create Custom Pizza", 'c', Screen::CustomPizza),
    ("Choose Pre-made Pizza", 'p', Screen::PreMadePizza),
];

/// Persistent state: which entry is highlighted.
#[derive(Debug, Default)]
pub struct FrontPageState {
    pub selected: usize,
}

impl EventHandler for FrontPageState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp | TuiEvent::BackTab => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::Tab => {
                self.selected = (self.selected + 1).min(ENTRIES.len() - 1);
                None
            }
            TuiEvent::Submit => ENTRIES
                .get(self.selected)
                .map(|(_, _, screen)| Action::NavigateTo(*screen)),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar(c) => ENTRIES
                .iter()
                .find(|(_, key, _)| key == c)
                .map(|(_, _, screen)| Action::NavigateTo(*screen)),
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct FrontPage<'a> {
    state: &'a FrontPageState,
    shop_name: &'a str,
}

impl<'a> FrontPage<'a> {
    pub fn new(state: &'a FrontPageState, shop_name: &'a str) -> Self {
        Self { state, shop_name }
    }
}

impl Component for FrontPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [banner_area, _, menu_area, _, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(ENTRIES.len() as u16 * 3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [banner_area] = Layout::horizontal([Constraint::Max(60)])
            .flex(Flex::Center)
            .areas(banner_area);
        let banner = Paragraph::new(Line::from(Span::styled(
            format!("Welcome to {}", self.shop_name),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_type(BorderType::Double));
        frame.render_widget(banner, banner_area);

        let [menu_area] = Layout::horizontal([Constraint::Max(40)])
            .flex(Flex::Center)
            .areas(menu_area);
        let rows = Layout::vertical(ENTRIES.iter().map(|_| Constraint::Length(3))).split(menu_area);
        for (i, ((label, key, _), row)) in ENTRIES.iter().zip(rows.iter()).enumerate() {
            let style = if i == self.state.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            let button = Paragraph::new(format!("{label}  [{key}]"))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_type(BorderType::Rounded));
            frame.render_widget(button, *row);
        }

        let footer = Paragraph::new(Line::from(Span::styled(
            format!("↑↓ Select  Enter Open  q Quit  v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);
    }
}
