//! Simulated biometric device
//!
//! Stands in for the platform prompt: availability and enrollment come
//! from the configured device profile, and the sensor result is either
//! scripted or chosen interactively while the prompt is on screen.
//! Completion always fires from a spawned thread, so results take the
//! same marshalling path a real platform callback would.

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use localauth_core::{BiometricError, BiometricErrorCode, BiometricPrompt, EvaluationCallback};

use crate::app::{DeviceConfig, ScriptedOutcome};

/// Sensor outcome, chosen by the user while the prompt is up (or taken
/// from the scripted config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The sensor matches an enrolled identity
    Grant,
    /// The sensor rejects the presented biometric
    Deny,
    /// The user dismisses the prompt
    Cancel,
}

impl From<ScriptedOutcome> for PromptOutcome {
    fn from(outcome: ScriptedOutcome) -> Self {
        match outcome {
            ScriptedOutcome::Grant => Self::Grant,
            ScriptedOutcome::Deny => Self::Deny,
            ScriptedOutcome::Cancel => Self::Cancel,
        }
    }
}

impl PromptOutcome {
    fn into_result(self) -> (bool, Option<BiometricError>) {
        match self {
            Self::Grant => (true, None),
            Self::Deny => (false, Some(BiometricError::new(BiometricErrorCode::Mismatch))),
            Self::Cancel => (
                false,
                Some(BiometricError::new(BiometricErrorCode::UserCancelled)),
            ),
        }
    }
}

/// A [`BiometricPrompt`] backed by a configured device profile.
pub struct SimulatedPrompt {
    config: DeviceConfig,
    /// Callback of the evaluation waiting for an interactive outcome
    pending: Mutex<Option<EvaluationCallback>>,
}

impl SimulatedPrompt {
    /// Create a device for a profile.
    pub fn new(config: DeviceConfig) -> Self {
        Self {
            config,
            pending: Mutex::new(None),
        }
    }

    /// Whether the demo waits for interactive sensor keys.
    pub fn is_interactive(&self) -> bool {
        self.config.scripted.is_none()
    }

    /// Resolve the pending evaluation with an interactive outcome.
    /// No-op when no evaluation is waiting.
    pub fn complete(&self, outcome: PromptOutcome) {
        let Some(callback) = self.pending.lock().unwrap().take() else {
            return;
        };
        finish(callback, outcome, self.config.latency());
    }
}

/// Fire the callback from a sensor thread after the configured latency.
fn finish(callback: EvaluationCallback, outcome: PromptOutcome, latency: Duration) {
    thread::spawn(move || {
        thread::sleep(latency);
        let (success, error) = outcome.into_result();
        callback(success, error);
    });
}

impl BiometricPrompt for SimulatedPrompt {
    fn can_evaluate(&self) -> Result<(), BiometricError> {
        if !self.config.available {
            return Err(BiometricError::new(BiometricErrorCode::NotAvailable));
        }
        if !self.config.enrolled {
            return Err(BiometricError::new(BiometricErrorCode::NotEnrolled));
        }
        Ok(())
    }

    fn evaluate(&self, reason: &str, on_result: EvaluationCallback) {
        tracing::info!(%reason, "starting simulated biometric evaluation");
        match self.config.scripted {
            Some(outcome) => finish(on_result, outcome.into(), self.config.latency()),
            None => {
                let mut pending = self.pending.lock().unwrap();
                if pending.replace(on_result).is_some() {
                    tracing::warn!("previous evaluation abandoned before completion");
                }
            }
        }
    }
}
