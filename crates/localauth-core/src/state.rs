//! Render states driving the authentication screen

use crate::error::{AuthError, ErrorOrigin};

/// What the presenter should do once a failure display has finished.
///
/// This is the failed state's one-shot continuation, expressed as data so
/// [`RenderState`] stays comparable and cloneable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Keep the failure on screen and offer a manual try-again affordance
    AwaitRetry,
    /// Fade to the username/password form after the timed display
    FallBackToPassword,
}

/// The single source of truth for what the screen currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderState {
    /// Screen just loaded, nothing attempted yet
    #[default]
    Initial,

    /// A biometric evaluation is in flight
    StrongestAvailableMethod,

    /// Manual credential entry
    UserIdPassword,

    /// Terminal success
    SuccessfullyAuthenticated,

    /// Authentication failed; `follow_up` runs after the timed display
    AuthenticationFailed {
        /// The classified failure cause, never absent
        cause: AuthError,
        /// Continuation applied once the failure has been displayed
        follow_up: FollowUp,
    },
}

/// Message framing for the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Success framing (green)
    Affirmative,
    /// Failure framing (red)
    Negative,
}

/// A user-facing status line derived purely from the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Message text
    pub text: String,
    /// Affirmative or negative framing
    pub tone: StatusTone,
}

impl RenderState {
    /// Build the failed state for a cause, deriving the follow-up from the
    /// error's origin domain: biometric-subsystem failures fall back to
    /// the manual form, application failures wait for an explicit retry.
    pub fn failed(cause: AuthError) -> Self {
        let follow_up = match cause.origin() {
            ErrorOrigin::Biometric => FollowUp::FallBackToPassword,
            ErrorOrigin::Application => FollowUp::AwaitRetry,
        };
        Self::AuthenticationFailed { cause, follow_up }
    }

    /// Status line for this state, if it shows one.
    pub fn status(&self) -> Option<StatusLine> {
        match self {
            Self::SuccessfullyAuthenticated => Some(StatusLine {
                text: "Successfully Authenticated!".to_string(),
                tone: StatusTone::Affirmative,
            }),
            Self::AuthenticationFailed { cause, .. } => Some(StatusLine {
                text: failure_text(cause),
                tone: StatusTone::Negative,
            }),
            _ => None,
        }
    }

    /// Whether this state ends the flow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::SuccessfullyAuthenticated)
    }
}

fn failure_text(cause: &AuthError) -> String {
    match cause {
        AuthError::NoIdentityEnrolled => {
            "No biometric identities are enrolled. Enroll one in your device settings to use biometric login.".to_string()
        }
        AuthError::AdapterUnavailable(err) => {
            format!("An authentication error occurred: {err}")
        }
        _ => "Authentication Attempt Failed!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BiometricError, BiometricErrorCode};

    #[test]
    fn test_failed_derives_follow_up_from_origin() {
        let biometric = RenderState::failed(AuthError::BiometricEvaluationFailed(
            BiometricError::new(BiometricErrorCode::Mismatch),
        ));
        assert!(matches!(
            biometric,
            RenderState::AuthenticationFailed {
                follow_up: FollowUp::FallBackToPassword,
                ..
            }
        ));

        let application = RenderState::failed(AuthError::InvalidCredential);
        assert!(matches!(
            application,
            RenderState::AuthenticationFailed {
                follow_up: FollowUp::AwaitRetry,
                ..
            }
        ));
    }

    #[test]
    fn test_status_tone_follows_outcome() {
        let success = RenderState::SuccessfullyAuthenticated.status().unwrap();
        assert_eq!(success.tone, StatusTone::Affirmative);
        assert_eq!(success.text, "Successfully Authenticated!");

        let failed = RenderState::failed(AuthError::InvalidCredential)
            .status()
            .unwrap();
        assert_eq!(failed.tone, StatusTone::Negative);
        assert_eq!(failed.text, "Authentication Attempt Failed!");
    }

    #[test]
    fn test_enrollment_failure_has_distinct_message() {
        let status = RenderState::failed(AuthError::NoIdentityEnrolled)
            .status()
            .unwrap();
        assert!(status.text.contains("Enroll"));
        assert_eq!(status.tone, StatusTone::Negative);
    }

    #[test]
    fn test_quiet_states_have_no_status() {
        assert!(RenderState::Initial.status().is_none());
        assert!(RenderState::StrongestAvailableMethod.status().is_none());
        assert!(RenderState::UserIdPassword.status().is_none());
    }
}
