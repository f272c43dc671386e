//! # NameInput Component
//!
//! Single-line text field for the customer name, shown on both ordering
//! screens.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `focused` is a prop from the
//! owning screen. Every edit emits `NameEvent::Changed` with the full text so
//! the parent can dispatch `Action::SetCustomerName` on each keystroke.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum NameEvent {
    /// Text changed; carries the whole new value.
    Changed(String),
    /// Enter pressed.
    Submit,
}

pub struct NameInput {
    pub buffer: String,
    /// Byte offset of the cursor in `buffer`, always on a char boundary.
    cursor: usize,
    pub focused: bool,
}

impl NameInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    /// Replace the contents (e.g. with the order's name when a screen opens).
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn changed(&self) -> Option<NameEvent> {
        Some(NameEvent::Changed(self.buffer.clone()))
    }
}

impl Default for NameInput {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map(|c| pos + c.len_utf8()).unwrap_or(pos)
}

impl Component for NameInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Customer Name");

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        if self.focused {
            let column = u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX);
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let x = area.x.saturating_add(1).saturating_add(column).min(max_x);
            frame.set_cursor_position((x, area.y.saturating_add(1)));
        }
    }
}

impl EventHandler for NameInput {
    type Event = NameEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: pasted newlines become spaces
                let clean: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .filter(|c| !c.is_control())
                    .collect();
                if clean.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor, &clean);
                self.cursor += clean.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(NameEvent::Submit),
            _ => None,
        }
    }
}
