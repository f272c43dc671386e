//! # TitleBar Component
//!
//! Top status bar: shop name, current screen, and the latest status message.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state. The text changes with state:
//!
//! 1. **Status message**: `"Slice | Custom Pizza | Added Medium Custom ($11.99)"`
//! 2. **Default**: `"Slice | Custom Pizza"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub shop_name: String,
    pub screen_title: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(shop_name: String, screen_title: String, status_message: String) -> Self {
        Self {
            shop_name,
            screen_title,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                self.shop_name.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(self.screen_title.clone()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
