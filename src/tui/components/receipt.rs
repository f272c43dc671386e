//! # Receipt Component
//!
//! Final summary of the order. The date line is whatever wall-clock stamp
//! the caller passes in at render time; it is not part of the order.

use std::fmt::Write;

use chrono::{DateTime, TimeZone};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::action::Action;
use crate::core::config::DEFAULT_RECEIPT_DATE_FORMAT;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Any "back" key returns to the main menu.
pub fn handle_event(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape | TuiEvent::Submit | TuiEvent::Backspace => Some(Action::GoBack),
        _ => None,
    }
}

/// Formats `now` with `format`, falling back to the default format when the
/// given one is not valid strftime. Configured formats are checked when the
/// config is resolved, so the fallback is silent here.
pub fn format_timestamp<Tz>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_ok() {
        return out;
    }
    now.format(DEFAULT_RECEIPT_DATE_FORMAT).to_string()
}

/// The receipt body, one entry per line.
pub fn receipt_lines(app: &App, timestamp: &str) -> Vec<String> {
    let order = &app.order;
    let mut lines = vec![
        format!("Customer: {}", order.customer_name()),
        format!("Date: {}", timestamp),
        String::new(),
    ];
    for (index, pizza) in order.pizzas().iter().enumerate() {
        lines.push(format!(
            "Pizza {}: {} {} - {}",
            index + 1,
            pizza.size(),
            pizza.name(),
            app.money(pizza.price())
        ));
        lines.push(format!("  Toppings: {}", pizza.toppings().joined()));
    }
    lines.push(String::new());
    lines.push(format!("Total: {}", app.money(order.total())));
    lines
}

pub struct Receipt<'a> {
    app: &'a App,
    timestamp: &'a str,
}

impl<'a> Receipt<'a> {
    pub fn new(app: &'a App, timestamp: &'a str) -> Self {
        Self { app, timestamp }
    }
}

impl Component for Receipt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = receipt_lines(self.app, self.timestamp);
        let total_index = body.len() - 1;

        let mut lines: Vec<Line> = body
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                if i == total_index {
                    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
                } else {
                    Line::from(text)
                }
            })
            .collect();
        lines.push(Line::from(Span::styled(
            "Thank you for your order!",
            Style::default().fg(Color::Yellow),
        )));

        let height = (lines.len() as u16 + 2).min(area.height);
        let [column] = Layout::horizontal([Constraint::Max(64)])
            .flex(Flex::Center)
            .areas(area);
        let [receipt_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .title(Line::from(" Order Receipt ").centered())
            .title_bottom(Line::from(" Enter Go Back to Main Menu ").centered())
            .padding(ratatui::widgets::Padding::horizontal(1));
        frame.render_widget(Paragraph::new(lines).block(block), receipt_area);
    }
}
