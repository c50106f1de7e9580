//! Username/password fallback form

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, FormFocus};
use crate::ui::layout::{centered_rect, section_block};

/// Draw the manual credential form.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let dialog = centered_rect(60, 60, area);

    let block = section_block("Sign In", &app.theme, true);
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Min(1),    // Spacer
        ])
        .split(inner);

    let prompt = Paragraph::new("Enter your username and password")
        .style(app.theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[0]);

    render_field(
        frame,
        chunks[1],
        app,
        "Username",
        &app.state.username_input,
        app.state.focus == FormFocus::Username,
    );

    // The password renders masked.
    let masked: String = "\u{25CF}".repeat(app.state.password_input.chars().count());
    render_field(
        frame,
        chunks[2],
        app,
        "Password",
        &masked,
        app.state.focus == FormFocus::Password,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    label: &str,
    value: &str,
    focused: bool,
) {
    let block = section_block(label, &app.theme, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = if focused { "_" } else { "" };
    let field = Paragraph::new(format!("{value}{cursor}")).style(app.theme.input(focused));
    frame.render_widget(field, inner);
}
