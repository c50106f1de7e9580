//! Presenter bookkeeping for timed status displays

use std::time::{Duration, Instant};

use localauth_core::{FollowUp, Presenter, RenderState, StatusLine};

/// What to do when the pending display deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayAction {
    /// Tell the state machine the failure display finished
    NotifyFailureDisplayed,
    /// Reveal the manual try-again affordance
    RevealRetry,
    /// Navigate to the welcome screen
    NavigateOnward,
}

#[derive(Debug, Clone, Copy)]
struct PendingDisplay {
    deadline: Instant,
    action: DisplayAction,
}

/// Terminal presenter.
///
/// Records the status line for the frame renderer and owns the timed
/// display. Every render overwrites the pending action, which is exactly
/// how a later transition cancels an earlier display's follow-up.
pub struct ScreenModel {
    delay: Duration,
    status: Option<StatusLine>,
    retry_visible: bool,
    pending: Option<PendingDisplay>,
    renders: u64,
}

impl ScreenModel {
    /// Create a presenter with the configured display duration.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            status: None,
            retry_visible: false,
            pending: None,
            renders: 0,
        }
    }

    /// The status line currently on display.
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// Whether the try-again affordance is on screen.
    pub fn retry_visible(&self) -> bool {
        self.retry_visible
    }

    /// Reveal the try-again affordance once the failure display finished.
    pub fn show_retry(&mut self) {
        self.retry_visible = true;
    }

    /// Total render notifications received.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Drop the status line, for when the app navigates away from the
    /// authentication screen.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Take the pending action if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<DisplayAction> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.action)
            }
            _ => None,
        }
    }

    /// Time left on the pending display, for the countdown hint.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }
}

impl Presenter for ScreenModel {
    fn render(&mut self, state: &RenderState) {
        self.renders += 1;
        self.status = state.status();
        self.retry_visible = false;

        self.pending = match state {
            RenderState::AuthenticationFailed { follow_up, .. } => Some(PendingDisplay {
                deadline: Instant::now() + self.delay,
                action: match follow_up {
                    FollowUp::FallBackToPassword => DisplayAction::NotifyFailureDisplayed,
                    FollowUp::AwaitRetry => DisplayAction::RevealRetry,
                },
            }),
            RenderState::SuccessfullyAuthenticated => Some(PendingDisplay {
                deadline: Instant::now() + self.delay,
                action: DisplayAction::NavigateOnward,
            }),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localauth_core::AuthError;

    #[test]
    fn test_failure_display_schedules_follow_up() {
        let mut model = ScreenModel::new(Duration::ZERO);
        model.render(&RenderState::failed(AuthError::NoIdentityEnrolled));

        assert!(model.status().is_some());
        assert_eq!(
            model.take_due(Instant::now()),
            Some(DisplayAction::NotifyFailureDisplayed)
        );
        // The action fires once.
        assert_eq!(model.take_due(Instant::now()), None);
    }

    #[test]
    fn test_application_failure_reveals_retry() {
        let mut model = ScreenModel::new(Duration::ZERO);
        model.render(&RenderState::failed(AuthError::InvalidCredential));

        assert!(!model.retry_visible());
        assert_eq!(
            model.take_due(Instant::now()),
            Some(DisplayAction::RevealRetry)
        );
    }

    #[test]
    fn test_pending_action_waits_for_deadline() {
        let mut model = ScreenModel::new(Duration::from_secs(60));
        model.render(&RenderState::SuccessfullyAuthenticated);

        assert_eq!(model.take_due(Instant::now()), None);
        assert!(model.remaining(Instant::now()).unwrap() > Duration::from_secs(50));
    }

    #[test]
    fn test_new_transition_cancels_pending_display() {
        let mut model = ScreenModel::new(Duration::ZERO);
        model.render(&RenderState::failed(AuthError::NoIdentityEnrolled));

        // An explicit transition lands before the deadline is checked.
        model.render(&RenderState::StrongestAvailableMethod);

        assert_eq!(model.take_due(Instant::now()), None);
        assert!(model.status().is_none());
    }

    #[test]
    fn test_every_render_is_counted() {
        let mut model = ScreenModel::new(Duration::ZERO);
        model.render(&RenderState::StrongestAvailableMethod);
        model.render(&RenderState::UserIdPassword);
        assert_eq!(model.renders(), 2);
    }
}
