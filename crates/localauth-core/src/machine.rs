//! The authentication state machine and its driver

use std::sync::Weak;

use crate::credential::CredentialPolicy;
use crate::error::AuthError;
use crate::event::AuthEvent;
use crate::prompt::{BiometricPrompt, EVALUATION_REASON};
use crate::state::{FollowUp, RenderState};

/// Renders the screen for a state.
///
/// Called exactly once per state entered. Message text, tone, and the
/// timed failure display all derive from the state itself.
pub trait Presenter {
    /// Show the UI for `state`.
    fn render(&mut self, state: &RenderState);
}

/// Marshals events produced on arbitrary threads back onto the thread
/// that drives the flow.
pub trait EventSink: Send + Sync {
    /// Queue an event for dispatch on the owning thread.
    fn submit(&self, event: AuthEvent);
}

/// Compute the next render state for an event.
///
/// Total over all (state, event) pairs; events that do not apply to the
/// current state re-enter it unchanged.
pub fn transition(
    current: &RenderState,
    event: AuthEvent,
    policy: &CredentialPolicy,
) -> RenderState {
    match (current, event) {
        // The screen becoming visible always restarts with the strongest
        // available method, whatever was on screen before.
        (_, AuthEvent::ScreenAppeared) => RenderState::StrongestAvailableMethod,

        (
            RenderState::StrongestAvailableMethod,
            AuthEvent::BiometricResult { success: true, .. },
        ) => RenderState::SuccessfullyAuthenticated,

        (
            RenderState::StrongestAvailableMethod,
            AuthEvent::BiometricResult {
                success: false,
                error,
            },
        ) => {
            // A result without an error object defaults to the unknown
            // classification before the origin-domain logic runs.
            let cause = error.map_or(AuthError::Unknown, AuthError::from_evaluation);
            RenderState::failed(cause)
        }

        (RenderState::UserIdPassword, AuthEvent::PasswordSubmitted(text)) => {
            if policy.verify(&text) {
                RenderState::SuccessfullyAuthenticated
            } else {
                RenderState::failed(AuthError::InvalidCredential)
            }
        }

        (RenderState::AuthenticationFailed { .. }, AuthEvent::RetryRequested) => {
            RenderState::StrongestAvailableMethod
        }

        (
            RenderState::AuthenticationFailed {
                follow_up: FollowUp::FallBackToPassword,
                ..
            },
            AuthEvent::FailureDisplayed,
        ) => RenderState::UserIdPassword,

        _ => current.clone(),
    }
}

/// Owns the current render state and drives transitions.
///
/// The flow lives on the single UI-affinity thread. Prompt callbacks reach
/// it again through the [`EventSink`] the embedder drains on that thread,
/// so transitions run to completion without overlap.
pub struct AuthFlow<P, R> {
    state: RenderState,
    prompt: P,
    presenter: R,
    policy: CredentialPolicy,
    sink: Weak<dyn EventSink>,
}

impl<P: BiometricPrompt, R: Presenter> AuthFlow<P, R> {
    /// Create a flow in the `Initial` state. `sink` must stay alive in the
    /// embedder for prompt results to be delivered.
    pub fn new(prompt: P, presenter: R, policy: CredentialPolicy, sink: Weak<dyn EventSink>) -> Self {
        Self {
            state: RenderState::Initial,
            prompt,
            presenter,
            policy,
            sink,
        }
    }

    /// Current render state.
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// The presenter collaborator.
    pub fn presenter(&self) -> &R {
        &self.presenter
    }

    /// Mutable access to the presenter, for embedders that keep display
    /// bookkeeping (timers, pending follow-ups) inside it.
    pub fn presenter_mut(&mut self) -> &mut R {
        &mut self.presenter
    }

    /// The prompt adapter.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Apply one event on the owning thread.
    pub fn dispatch(&mut self, event: AuthEvent) {
        tracing::debug!(state = ?self.state, ?event, "dispatching auth event");
        let next = transition(&self.state, event, &self.policy);
        self.enter(next);
    }

    fn enter(&mut self, next: RenderState) {
        self.state = next;
        self.presenter.render(&self.state);

        if self.state == RenderState::StrongestAvailableMethod {
            self.attempt_biometric_evaluation();
        }
    }

    /// The attempt run when entering `StrongestAvailableMethod`: refuse
    /// with a classified failure when the adapter is unavailable, start an
    /// asynchronous evaluation otherwise.
    fn attempt_biometric_evaluation(&mut self) {
        if let Err(err) = self.prompt.can_evaluate() {
            tracing::warn!(%err, "biometric prompt unavailable");
            let failed = RenderState::failed(AuthError::from_unavailable(err));
            self.enter(failed);
            return;
        }

        let sink = self.sink.clone();
        self.prompt.evaluate(
            EVALUATION_REASON,
            Box::new(move |success, error| {
                // No-op if the screen was torn down before the prompt
                // finished.
                if let Some(sink) = sink.upgrade() {
                    sink.submit(AuthEvent::BiometricResult { success, error });
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BiometricError, BiometricErrorCode};

    fn policy() -> CredentialPolicy {
        CredentialPolicy::default()
    }

    fn mismatch() -> BiometricError {
        BiometricError::new(BiometricErrorCode::Mismatch)
    }

    #[test]
    fn test_screen_appeared_restarts_from_any_state() {
        let states = [
            RenderState::Initial,
            RenderState::UserIdPassword,
            RenderState::SuccessfullyAuthenticated,
            RenderState::failed(AuthError::InvalidCredential),
        ];
        for state in states {
            assert_eq!(
                transition(&state, AuthEvent::ScreenAppeared, &policy()),
                RenderState::StrongestAvailableMethod
            );
        }
    }

    #[test]
    fn test_biometric_success() {
        let next = transition(
            &RenderState::StrongestAvailableMethod,
            AuthEvent::BiometricResult {
                success: true,
                error: None,
            },
            &policy(),
        );
        assert_eq!(next, RenderState::SuccessfullyAuthenticated);
    }

    #[test]
    fn test_biometric_failure_classifies_error() {
        let next = transition(
            &RenderState::StrongestAvailableMethod,
            AuthEvent::BiometricResult {
                success: false,
                error: Some(mismatch()),
            },
            &policy(),
        );
        assert_eq!(
            next,
            RenderState::AuthenticationFailed {
                cause: AuthError::BiometricEvaluationFailed(mismatch()),
                follow_up: FollowUp::FallBackToPassword,
            }
        );
    }

    #[test]
    fn test_missing_error_defaults_to_unknown() {
        let next = transition(
            &RenderState::StrongestAvailableMethod,
            AuthEvent::BiometricResult {
                success: false,
                error: None,
            },
            &policy(),
        );
        assert_eq!(
            next,
            RenderState::AuthenticationFailed {
                cause: AuthError::Unknown,
                follow_up: FollowUp::AwaitRetry,
            }
        );
    }

    #[test]
    fn test_not_enrolled_result_carries_enrollment_cause() {
        let next = transition(
            &RenderState::StrongestAvailableMethod,
            AuthEvent::BiometricResult {
                success: false,
                error: Some(BiometricError::new(BiometricErrorCode::NotEnrolled)),
            },
            &policy(),
        );
        assert_eq!(
            next,
            RenderState::AuthenticationFailed {
                cause: AuthError::NoIdentityEnrolled,
                follow_up: FollowUp::FallBackToPassword,
            }
        );
    }

    #[test]
    fn test_password_accepted_case_insensitively() {
        let next = transition(
            &RenderState::UserIdPassword,
            AuthEvent::PasswordSubmitted("PASSWORD".to_string()),
            &policy(),
        );
        assert_eq!(next, RenderState::SuccessfullyAuthenticated);
    }

    #[test]
    fn test_password_accepted_with_surrounding_whitespace() {
        let next = transition(
            &RenderState::UserIdPassword,
            AuthEvent::PasswordSubmitted("  password  ".to_string()),
            &policy(),
        );
        assert_eq!(next, RenderState::SuccessfullyAuthenticated);
    }

    #[test]
    fn test_wrong_password_waits_for_retry() {
        let next = transition(
            &RenderState::UserIdPassword,
            AuthEvent::PasswordSubmitted("wrong".to_string()),
            &policy(),
        );
        assert_eq!(
            next,
            RenderState::AuthenticationFailed {
                cause: AuthError::InvalidCredential,
                follow_up: FollowUp::AwaitRetry,
            }
        );
    }

    #[test]
    fn test_retry_restarts_biometrics() {
        let next = transition(
            &RenderState::failed(AuthError::InvalidCredential),
            AuthEvent::RetryRequested,
            &policy(),
        );
        assert_eq!(next, RenderState::StrongestAvailableMethod);
    }

    #[test]
    fn test_displayed_biometric_failure_falls_back_to_password() {
        let next = transition(
            &RenderState::failed(AuthError::NoIdentityEnrolled),
            AuthEvent::FailureDisplayed,
            &policy(),
        );
        assert_eq!(next, RenderState::UserIdPassword);
    }

    #[test]
    fn test_displayed_application_failure_stays_failed() {
        let failed = RenderState::failed(AuthError::InvalidCredential);
        let next = transition(&failed, AuthEvent::FailureDisplayed, &policy());
        assert_eq!(next, failed);
    }

    #[test]
    fn test_inapplicable_events_are_identity() {
        let next = transition(
            &RenderState::Initial,
            AuthEvent::PasswordSubmitted("password".to_string()),
            &policy(),
        );
        assert_eq!(next, RenderState::Initial);

        let next = transition(
            &RenderState::UserIdPassword,
            AuthEvent::BiometricResult {
                success: true,
                error: None,
            },
            &policy(),
        );
        assert_eq!(next, RenderState::UserIdPassword);
    }
}
