//! LocalAuth Core - Authentication state machine for a biometric login screen
//!
//! This crate owns the render states, events, and transition policy of a
//! single authentication screen: try the strongest available biometric
//! method first, fall back to a username/password form when biometrics are
//! unavailable or fail. The platform prompt and the actual rendering are
//! external collaborators behind the [`BiometricPrompt`] and [`Presenter`]
//! traits.
//!
//! # Security Notice
//! This is a demo of a screen flow, not a security system. The credential
//! check compares against a fixed demo constant and nothing is persisted.

use std::time::Duration;

pub mod credential;
pub mod error;
pub mod event;
pub mod machine;
pub mod prompt;
pub mod state;

pub use credential::{normalize, CredentialPolicy, DEMO_PASSWORD};
pub use error::{AuthError, BiometricError, BiometricErrorCode, ErrorOrigin};
pub use event::AuthEvent;
pub use machine::{transition, AuthFlow, EventSink, Presenter};
pub use prompt::{BiometricPrompt, EvaluationCallback, EVALUATION_REASON};
pub use state::{FollowUp, RenderState, StatusLine, StatusTone};

/// How long a status display stays on screen before its follow-up runs.
///
/// Owned by the presenter, not the state machine; any explicit transition
/// replacing the pending state cancels it.
pub const PRESENTATION_DELAY: Duration = Duration::from_secs(3);
