//! # Current Order Component
//!
//! The running list of pizzas shown under both ordering screens, with the
//! total and whether the order can be completed yet.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem};

use crate::core::pizza::Pizza;
use crate::core::state::App;
use crate::tui::component::Component;

/// How each pizza is described in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// `Medium Custom Pizza with Cheese, Onions: $11.99`
    WithToppings,
    /// `Medium Margherita Pizza: $9.99`
    Plain,
}

pub fn format_line(app: &App, pizza: &Pizza, style: LineStyle) -> String {
    match style {
        LineStyle::WithToppings if !pizza.toppings().is_empty() => format!(
            "{} {} Pizza with {}: {}",
            pizza.size(),
            pizza.name(),
            pizza.toppings().joined(),
            app.money(pizza.price())
        ),
        _ => format!(
            "{} {} Pizza: {}",
            pizza.size(),
            pizza.name(),
            app.money(pizza.price())
        ),
    }
}

pub struct OrderLines<'a> {
    app: &'a App,
    style: LineStyle,
}

impl<'a> OrderLines<'a> {
    pub fn new(app: &'a App, style: LineStyle) -> Self {
        Self { app, style }
    }
}

impl Component for OrderLines<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let order = &self.app.order;

        let complete_hint = if order.can_complete() {
            Span::styled(" Ctrl+O Complete Order ", Style::default().fg(Color::Green))
        } else {
            Span::styled(
                " Ctrl+O Complete Order ",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        };

        let total = format!(" Total: {} ", self.app.money(order.total()));
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Current Order ")
            .title_bottom(Line::from(total).left_aligned())
            .title_bottom(Line::from(complete_hint).right_aligned());

        let items: Vec<ListItem> = if order.pizzas().is_empty() {
            vec![ListItem::new(Span::styled(
                "No pizzas yet",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            order
                .pizzas()
                .iter()
                .map(|pizza| {
                    ListItem::new(Span::styled(
                        format_line(self.app, pizza, self.style),
                        Style::default().fg(Color::Gray),
                    ))
                })
                .collect()
        };

        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pizza::{Size, ToppingSet};
    use crate::test_support::{margherita, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use rust_decimal::Decimal;

    #[test]
    fn test_format_line_with_toppings() {
        let app = test_app();
        let pizza = Pizza::new(
            "Custom",
            Size::Medium,
            ["Cheese", "Onions"].into_iter().collect(),
            Decimal::new(1199, 2),
        );
        assert_eq!(
            format_line(&app, &pizza, LineStyle::WithToppings),
            "Medium Custom Pizza with Cheese, Onions: $11.99"
        );
        assert_eq!(
            format_line(&app, &pizza, LineStyle::Plain),
            "Medium Custom Pizza: $11.99"
        );
    }

    #[test]
    fn test_format_line_without_toppings_drops_with() {
        let app = test_app();
        let pizza = Pizza::new("Custom", Size::Small, ToppingSet::new(), Decimal::new(899, 2));
        assert_eq!(
            format_line(&app, &pizza, LineStyle::WithToppings),
            "Small Custom Pizza: $8.99"
        );
    }

    #[test]
    fn test_render_lists_pizzas_and_total() {
        let mut app = test_app();
        app.order.add_pizza(margherita());
        app.order.add_pizza(margherita());

        let backend = TestBackend::new(70, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| OrderLines::new(&app, LineStyle::Plain).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert_eq!(text.matches("Medium Margherita Pizza: $9.99").count(), 2);
        assert!(text.contains("Total: $19.98"));
    }

    #[test]
    fn test_render_empty_order() {
        let app = test_app();
        let backend = TestBackend::new(70, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| OrderLines::new(&app, LineStyle::WithToppings).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("No pizzas yet"));
        assert!(text.contains("Total: $0.00"));
    }
}
