//! Events feeding the authentication state machine

use crate::error::BiometricError;

/// Inputs to the transition function.
///
/// User actions and adapter callbacks both arrive as events. Adapter
/// results originate on arbitrary threads and must be marshalled onto the
/// thread that owns the flow before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// The screen became visible
    ScreenAppeared,

    /// The user submitted the manual credential form
    PasswordSubmitted(String),

    /// The user pressed the try-again affordance
    RetryRequested,

    /// The biometric prompt finished
    BiometricResult {
        /// Whether the evaluation succeeded
        success: bool,
        /// Error detail on failure; absence is classified as unknown
        error: Option<BiometricError>,
    },

    /// The presenter finished the timed failure display
    FailureDisplayed,
}
