use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CustomPizzaScreen, FrontPage, PreMadePizzaScreen, Receipt, TitleBar,
};

/// Draws the title bar and whichever screen is on top of the stack.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, timestamp: &str) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let screen = app.screen();
    TitleBar::new(
        app.shop_name.clone(),
        screen.title().to_string(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    match screen {
        Screen::FrontPage => {
            FrontPage::new(&tui.front_page, &app.shop_name).render(frame, main_area)
        }
        Screen::CustomPizza => {
            CustomPizzaScreen::new(&mut tui.builder, app).render(frame, main_area)
        }
        Screen::PreMadePizza => {
            PreMadePizzaScreen::new(&mut tui.picker, app).render(frame, main_area)
        }
        Screen::Receipt => Receipt::new(app, timestamp).render(frame, main_area),
    }
}
