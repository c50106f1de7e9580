//! Error taxonomy for the authentication screen
//!
//! Every failure here is recovered locally by the state machine; none of
//! them propagate beyond the screen boundary.

use std::fmt;

use thiserror::Error;

/// Classified biometric prompt error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometricErrorCode {
    /// The presented biometric did not match an enrolled identity
    Mismatch,
    /// The user dismissed the prompt
    UserCancelled,
    /// The system dismissed the prompt (app backgrounded, interrupted)
    SystemCancelled,
    /// No biometric identities are enrolled on the device
    NotEnrolled,
    /// The device has no usable biometric hardware
    NotAvailable,
    /// Too many failed attempts; the sensor is locked
    Lockout,
}

impl BiometricErrorCode {
    /// Map a raw platform error code.
    ///
    /// Unknown codes are treated as a plain mismatch.
    pub fn from_raw(code: i32) -> Self {
        match code {
            -2 => Self::UserCancelled,
            -4 => Self::SystemCancelled,
            -6 => Self::NotAvailable,
            -7 => Self::NotEnrolled,
            -8 => Self::Lockout,
            _ => Self::Mismatch,
        }
    }
}

impl fmt::Display for BiometricErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Mismatch => "biometric did not match",
            Self::UserCancelled => "cancelled by the user",
            Self::SystemCancelled => "cancelled by the system",
            Self::NotEnrolled => "no biometric identities enrolled",
            Self::NotAvailable => "biometric hardware not available",
            Self::Lockout => "biometric sensor locked out",
        };
        f.write_str(text)
    }
}

/// An error reported by the biometric prompt adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}")]
pub struct BiometricError {
    /// Classified error code
    pub code: BiometricErrorCode,
}

impl BiometricError {
    /// Wrap a classified code.
    pub fn new(code: BiometricErrorCode) -> Self {
        Self { code }
    }

    /// Classify a raw platform error code.
    pub fn from_raw(code: i32) -> Self {
        Self::new(BiometricErrorCode::from_raw(code))
    }
}

/// Authentication failure causes, partitioned by origin domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The biometric subsystem cannot run an evaluation at all
    #[error("biometric authentication is unavailable: {0}")]
    AdapterUnavailable(BiometricError),

    /// A biometric evaluation ran and failed
    #[error("biometric evaluation failed: {0}")]
    BiometricEvaluationFailed(BiometricError),

    /// No biometric identities are enrolled on the device
    #[error("no biometric identities are enrolled")]
    NoIdentityEnrolled,

    /// The submitted username/password pair was rejected
    #[error("invalid username or password")]
    InvalidCredential,

    /// The adapter reported failure without an error object
    #[error("unknown authentication error")]
    Unknown,
}

/// Which subsystem produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOrigin {
    /// The platform biometric subsystem
    Biometric,
    /// The application itself (credential check, missing adapter data)
    Application,
}

impl AuthError {
    /// Classify an error from a finished evaluation, special-casing the
    /// missing-enrollment condition.
    pub fn from_evaluation(error: BiometricError) -> Self {
        match error.code {
            BiometricErrorCode::NotEnrolled => Self::NoIdentityEnrolled,
            _ => Self::BiometricEvaluationFailed(error),
        }
    }

    /// Classify a `can_evaluate` refusal.
    pub fn from_unavailable(error: BiometricError) -> Self {
        match error.code {
            BiometricErrorCode::NotEnrolled => Self::NoIdentityEnrolled,
            _ => Self::AdapterUnavailable(error),
        }
    }

    /// The origin domain that drives the post-display behavior.
    pub fn origin(&self) -> ErrorOrigin {
        match self {
            Self::AdapterUnavailable(_)
            | Self::BiometricEvaluationFailed(_)
            | Self::NoIdentityEnrolled => ErrorOrigin::Biometric,
            Self::InvalidCredential | Self::Unknown => ErrorOrigin::Application,
        }
    }
}
