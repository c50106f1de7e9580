//! Biometric prompt adapter seam

use crate::error::BiometricError;

/// Reason string shown by the platform prompt while evaluating.
pub const EVALUATION_REASON: &str = "Authenticate to login to your account.";

/// Result callback handed to [`BiometricPrompt::evaluate`].
///
/// May be invoked from any thread. Implementations capture only non-owning
/// handles back to the screen, so a prompt finishing after teardown is a
/// silent no-op.
pub type EvaluationCallback = Box<dyn FnOnce(bool, Option<BiometricError>) + Send + 'static>;

/// Wraps the platform's "can evaluate" + "evaluate" biometric check.
pub trait BiometricPrompt {
    /// Whether an evaluation can be attempted at all.
    fn can_evaluate(&self) -> Result<(), BiometricError>;

    /// Start an asynchronous evaluation. The callback fires exactly once,
    /// possibly on another thread.
    fn evaluate(&self, reason: &str, on_result: EvaluationCallback);
}
