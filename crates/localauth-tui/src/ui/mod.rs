//! UI rendering

pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use localauth_core::RenderState;
use ratatui::prelude::*;

use crate::app::{App, AppScreen};

/// Main render function - delegates to the screen for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = layout::ScreenLayout::new(frame.area());

    layout::render_header(frame, chunks.header, screen_title(app), &app.theme);

    match app.state.screen {
        AppScreen::Welcome => screens::welcome::draw(frame, chunks.content, app),
        AppScreen::Authentication => match app.render_state() {
            RenderState::Initial | RenderState::StrongestAvailableMethod => {
                screens::biometric::draw(frame, chunks.content, app);
            }
            RenderState::UserIdPassword => screens::password::draw(frame, chunks.content, app),
            RenderState::SuccessfullyAuthenticated | RenderState::AuthenticationFailed { .. } => {
                screens::status::draw(frame, chunks.content, app);
            }
        },
    }

    layout::render_status_bar(frame, chunks.status, app.model().status(), &app.theme);
    layout::render_footer(frame, chunks.footer, &hints(app), &app.theme);
}

fn screen_title(app: &App) -> &'static str {
    if app.state.screen == AppScreen::Welcome {
        return "Welcome";
    }
    match app.render_state() {
        RenderState::Initial => "Loading",
        RenderState::StrongestAvailableMethod => "Biometric Check",
        RenderState::UserIdPassword => "Sign In",
        RenderState::SuccessfullyAuthenticated => "Authenticated",
        RenderState::AuthenticationFailed { .. } => "Authentication Failed",
    }
}

fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.state.screen == AppScreen::Welcome {
        return vec![("l", "Log Out"), ("q", "Quit")];
    }

    match app.render_state() {
        RenderState::StrongestAvailableMethod if app.prompt().is_interactive() => vec![
            ("g", "Grant"),
            ("d", "Deny"),
            ("Esc", "Cancel"),
            ("q", "Quit"),
        ],
        RenderState::StrongestAvailableMethod => vec![("q", "Quit")],
        RenderState::UserIdPassword => {
            vec![("Tab", "Switch Field"), ("Enter", "Sign In"), ("Ctrl-C", "Quit")]
        }
        RenderState::AuthenticationFailed { .. } if app.model().retry_visible() => {
            vec![("r", "Try Again"), ("q", "Quit")]
        }
        RenderState::AuthenticationFailed { .. } => vec![("q", "Quit")],
        _ => vec![("Ctrl-C", "Quit")],
    }
}
