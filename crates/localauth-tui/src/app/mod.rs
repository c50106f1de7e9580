//! Application state and event handling

mod config;
mod events;
mod presenter;
mod state;

pub use config::{ConfigError, DeviceConfig, ScriptedOutcome, TuiConfig};
pub use events::{start_event_loop, ChannelSink, Event};
pub use presenter::{DisplayAction, ScreenModel};
pub use state::{AppScreen, AppState, FormFocus};

use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use localauth_core::{AuthEvent, AuthFlow, CredentialPolicy, EventSink, RenderState};
use ratatui::prelude::*;

use crate::device::{PromptOutcome, SimulatedPrompt};
use crate::ui::{self, Theme};

/// Tick rate for animations and pending display deadlines
const TICK_RATE: Duration = Duration::from_millis(100);

/// Maximum credential input length
const MAX_INPUT_LEN: usize = 64;

/// Main application struct
pub struct App {
    /// The authentication flow: state machine, simulated device, presenter
    flow: AuthFlow<SimulatedPrompt, ScreenModel>,

    /// Screen-local UI state
    pub state: AppState,

    /// Visual theme
    pub theme: Theme,

    /// Strong end of the sink; prompt callbacks hold it weakly, so
    /// dropping the app silences late sensor results
    _sink: Arc<ChannelSink>,

    /// Event channel receiver, the loop's single input
    receiver: tokio::sync::mpsc::UnboundedReceiver<Event>,

    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create a new application instance from config.
    pub fn new(config: TuiConfig) -> Self {
        let (sender, receiver) = start_event_loop(TICK_RATE);
        let sink = Arc::new(ChannelSink::new(sender));
        let weak: Weak<ChannelSink> = Arc::downgrade(&sink);
        let weak: Weak<dyn EventSink> = weak;

        let flow = AuthFlow::new(
            SimulatedPrompt::new(config.device.clone()),
            ScreenModel::new(config.presentation_delay()),
            CredentialPolicy::default(),
            weak,
        );

        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };

        Self {
            flow,
            state: AppState::new(),
            theme,
            _sink: sink,
            receiver,
            should_quit: false,
        }
    }

    /// The machine's current render state.
    pub fn render_state(&self) -> &RenderState {
        self.flow.state()
    }

    /// The presenter's display bookkeeping.
    pub fn model(&self) -> &ScreenModel {
        self.flow.presenter()
    }

    /// The simulated device.
    pub fn prompt(&self) -> &SimulatedPrompt {
        self.flow.prompt()
    }

    /// Run the application main loop.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        // The screen is on display as soon as the loop starts.
        self.flow.dispatch(AuthEvent::ScreenAppeared);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            match self.receiver.recv().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Tick) => self.handle_tick(),
                Some(Event::Auth(event)) => self.flow.dispatch(event),
                None => break,
            }
        }

        Ok(())
    }

    fn handle_tick(&mut self) {
        self.state.tick = self.state.tick.wrapping_add(1);

        if let Some(action) = self.flow.presenter_mut().take_due(Instant::now()) {
            match action {
                DisplayAction::NotifyFailureDisplayed => {
                    self.flow.dispatch(AuthEvent::FailureDisplayed);
                }
                DisplayAction::RevealRetry => self.flow.presenter_mut().show_retry(),
                DisplayAction::NavigateOnward => {
                    self.flow.presenter_mut().clear_status();
                    self.state.screen = AppScreen::Welcome;
                }
            }
        }
    }

    /// Handle key press events.
    fn handle_key(&mut self, key: KeyEvent) {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state.screen {
            AppScreen::Welcome => self.handle_welcome_key(key.code),
            AppScreen::Authentication => match self.flow.state() {
                RenderState::StrongestAvailableMethod => self.handle_prompt_key(key.code),
                RenderState::UserIdPassword => self.handle_form_key(key.code),
                RenderState::AuthenticationFailed { .. } => self.handle_failed_key(key.code),
                RenderState::Initial | RenderState::SuccessfullyAuthenticated => {}
            },
        }
    }

    /// Keys while the biometric prompt is up: the user stands in for the
    /// sensor.
    fn handle_prompt_key(&mut self, key: KeyCode) {
        let outcome = match key {
            KeyCode::Enter | KeyCode::Char('g') => Some(PromptOutcome::Grant),
            KeyCode::Char('d') => Some(PromptOutcome::Deny),
            KeyCode::Esc | KeyCode::Char('c') => Some(PromptOutcome::Cancel),
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            _ => None,
        };

        if let Some(outcome) = outcome {
            self.flow.prompt().complete(outcome);
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => self.state.toggle_focus(),
            KeyCode::Backspace => {
                self.state.focused_input_mut().pop();
            }
            KeyCode::Enter => self.submit_credentials(),
            KeyCode::Char(c) => {
                let input = self.state.focused_input_mut();
                if input.len() < MAX_INPUT_LEN {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Submit the credential form. The fields clear before verification
    /// runs, so a failure never leaves the password on screen.
    fn submit_credentials(&mut self) {
        let password = std::mem::take(&mut self.state.password_input);
        self.state.username_input.clear();
        self.state.focus = FormFocus::Username;

        self.flow.dispatch(AuthEvent::PasswordSubmitted(password));
    }

    fn handle_failed_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('r') if self.flow.presenter().retry_visible() => {
                self.flow.dispatch(AuthEvent::RetryRequested);
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_welcome_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('l') => {
                // Log out: back to the screen, which restarts biometrics.
                self.state.screen = AppScreen::Authentication;
                self.flow.dispatch(AuthEvent::ScreenAppeared);
            }
            _ => {}
        }
    }
}
