//! Authentication result display
//!
//! Shown while a success or failure message is on its timed display. The
//! message itself also appears in the status bar; this screen carries the
//! large framing and the retry affordance.

use std::time::Instant;

use localauth_core::{FollowUp, RenderState, StatusTone};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::layout::centered_rect;

/// Draw the result panel for a success or failure state.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = app.model().status() else {
        return;
    };

    let dialog = centered_rect(70, 40, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Symbol
            Constraint::Length(2), // Message
            Constraint::Min(1),    // Affordance / countdown
        ])
        .split(dialog);

    let symbol = match status.tone {
        StatusTone::Affirmative => "\u{2713}",
        StatusTone::Negative => "\u{2717}",
    };
    let symbol = Paragraph::new(symbol)
        .style(app.theme.status(status.tone))
        .alignment(Alignment::Center);
    frame.render_widget(symbol, chunks[0]);

    let message = Paragraph::new(status.text.as_str())
        .style(app.theme.status(status.tone))
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(message, chunks[1]);

    let hint = affordance_text(app);
    if let Some(hint) = hint {
        let hint = Paragraph::new(hint)
            .style(app.theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);
    }
}

fn affordance_text(app: &App) -> Option<String> {
    if app.model().retry_visible() {
        return Some("Press [r] to try again".to_string());
    }

    let remaining = app.model().remaining(Instant::now())?;
    let seconds = remaining.as_secs() + 1;
    match app.render_state() {
        RenderState::AuthenticationFailed {
            follow_up: FollowUp::FallBackToPassword,
            ..
        } => Some(format!("Switching to password sign-in in {seconds}s...")),
        RenderState::AuthenticationFailed { .. } => None,
        RenderState::SuccessfullyAuthenticated => Some(format!("Continuing in {seconds}s...")),
        _ => None,
    }
}
