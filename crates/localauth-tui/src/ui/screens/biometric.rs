//! Biometric prompt screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use localauth_core::EVALUATION_REASON;

use crate::app::App;
use crate::ui::layout::{centered_rect, section_block};

/// Frames of the scanning indicator
const SCAN_FRAMES: [&str; 4] = ["[.    ]", "[ ..  ]", "[  .. ]", "[    .]"];

/// Draw the biometric prompt dialog.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let dialog = centered_rect(60, 50, area);

    let block = section_block("Biometric Authentication", &app.theme, true);
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Reason
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Scan indicator
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Instructions
        ])
        .split(inner);

    let reason = Paragraph::new(EVALUATION_REASON)
        .style(app.theme.text())
        .alignment(Alignment::Center);
    frame.render_widget(reason, chunks[0]);

    let scan_frame = SCAN_FRAMES[(app.state.tick / 3) as usize % SCAN_FRAMES.len()];
    let indicator = Paragraph::new(scan_frame)
        .style(app.theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(indicator, chunks[2]);

    let instructions = if app.prompt().is_interactive() {
        "Touch the sensor: [g] grant  [d] deny  [Esc] cancel"
    } else {
        "Waiting for the sensor..."
    };
    let instructions = Paragraph::new(instructions)
        .style(app.theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(instructions, chunks[4]);
}
