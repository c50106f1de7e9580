//! Post-authentication welcome screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::layout::{centered_rect, section_block};

/// Draw the screen behind the login gate.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let dialog = centered_rect(60, 40, area);

    let block = section_block("Welcome", &app.theme, false);
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Min(1),    // Hint
        ])
        .split(inner);

    let greeting = Paragraph::new("You are signed in.")
        .style(app.theme.success())
        .alignment(Alignment::Center);
    frame.render_widget(greeting, chunks[0]);

    let hint = Paragraph::new("This is where the app proper would live.")
        .style(app.theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[1]);
}
