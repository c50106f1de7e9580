//! Screen-local UI state

/// Which top-level screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppScreen {
    /// The authentication screen driven by the state machine
    #[default]
    Authentication,
    /// The post-authentication welcome screen
    Welcome,
}

/// Which credential field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    /// Username text field
    #[default]
    Username,
    /// Password text field
    Password,
}

/// Input buffers and per-frame bookkeeping for the terminal screen.
pub struct AppState {
    /// Current top-level screen
    pub screen: AppScreen,

    /// Username input buffer
    pub username_input: String,

    /// Password input buffer (rendered masked)
    pub password_input: String,

    /// Which credential field has focus
    pub focus: FormFocus,

    /// Tick counter for animations
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create fresh screen state.
    pub fn new() -> Self {
        Self {
            screen: AppScreen::Authentication,
            username_input: String::new(),
            password_input: String::new(),
            focus: FormFocus::Username,
            tick: 0,
        }
    }

    /// Move focus to the other credential field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormFocus::Username => FormFocus::Password,
            FormFocus::Password => FormFocus::Username,
        };
    }

    /// The input buffer for the focused field.
    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            FormFocus::Username => &mut self.username_input,
            FormFocus::Password => &mut self.password_input,
        }
    }
}
