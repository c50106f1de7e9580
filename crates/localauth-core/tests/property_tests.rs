//! Property-based tests for localauth-core using proptest
//!
//! These tests verify invariants that should hold for all valid inputs.

use localauth_core::{
    normalize, transition, AuthError, AuthEvent, BiometricError, CredentialPolicy, RenderState,
    StatusTone,
};
use proptest::prelude::*;

// ============================================
// Arbitrary Implementations
// ============================================

fn arb_biometric_error() -> impl Strategy<Value = BiometricError> {
    any::<i32>().prop_map(BiometricError::from_raw)
}

fn arb_cause() -> impl Strategy<Value = AuthError> {
    prop_oneof![
        Just(AuthError::NoIdentityEnrolled),
        Just(AuthError::InvalidCredential),
        Just(AuthError::Unknown),
        arb_biometric_error().prop_map(AuthError::AdapterUnavailable),
        arb_biometric_error().prop_map(AuthError::BiometricEvaluationFailed),
    ]
}

fn arb_state() -> impl Strategy<Value = RenderState> {
    prop_oneof![
        Just(RenderState::Initial),
        Just(RenderState::StrongestAvailableMethod),
        Just(RenderState::UserIdPassword),
        Just(RenderState::SuccessfullyAuthenticated),
        arb_cause().prop_map(RenderState::failed),
    ]
}

fn arb_event() -> impl Strategy<Value = AuthEvent> {
    prop_oneof![
        Just(AuthEvent::ScreenAppeared),
        Just(AuthEvent::RetryRequested),
        Just(AuthEvent::FailureDisplayed),
        ".*".prop_map(AuthEvent::PasswordSubmitted),
        (any::<bool>(), proptest::option::of(arb_biometric_error())).prop_map(
            |(success, error)| AuthEvent::BiometricResult { success, error }
        ),
    ]
}

// ============================================
// Properties
// ============================================

proptest! {
    /// normalize(normalize(s)) == normalize(s) for every input.
    #[test]
    fn prop_normalize_is_idempotent(s in ".*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Normalized strings carry no surrounding whitespace or uppercase.
    #[test]
    fn prop_normalize_trims_and_folds(s in ".*") {
        let normalized = normalize(&s);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.chars().any(|c| c.is_uppercase()));
    }

    /// The transition function is total: no (state, event) pair panics.
    #[test]
    fn prop_transition_is_total(state in arb_state(), event in arb_event()) {
        let policy = CredentialPolicy::default();
        let _ = transition(&state, event, &policy);
    }

    /// Screen appearance restarts biometrics from anywhere.
    #[test]
    fn prop_screen_appeared_always_restarts(state in arb_state()) {
        let policy = CredentialPolicy::default();
        prop_assert_eq!(
            transition(&state, AuthEvent::ScreenAppeared, &policy),
            RenderState::StrongestAvailableMethod
        );
    }

    /// Every failed biometric result produces a failed state with a
    /// concrete cause and a negative status line.
    #[test]
    fn prop_failed_results_always_classified(error in proptest::option::of(arb_biometric_error())) {
        let policy = CredentialPolicy::default();
        let next = transition(
            &RenderState::StrongestAvailableMethod,
            AuthEvent::BiometricResult { success: false, error },
            &policy,
        );
        match next {
            RenderState::AuthenticationFailed { .. } => {
                let status = next.status().expect("failed state has a status line");
                prop_assert_eq!(status.tone, StatusTone::Negative);
            }
            other => prop_assert!(false, "expected failed state, got {:?}", other),
        }
    }

    /// Whitespace and case decoration never change whether a password is
    /// accepted.
    #[test]
    fn prop_password_decoration_is_irrelevant(
        pad_left in "[ \t]{0,4}",
        pad_right in "[ \t]{0,4}",
        password in "[a-zA-Z0-9]{1,16}",
    ) {
        let policy = CredentialPolicy::default();
        let decorated = format!("{pad_left}{password}{pad_right}");

        let plain = transition(
            &RenderState::UserIdPassword,
            AuthEvent::PasswordSubmitted(password),
            &policy,
        );
        let padded = transition(
            &RenderState::UserIdPassword,
            AuthEvent::PasswordSubmitted(decorated),
            &policy,
        );
        prop_assert_eq!(plain, padded);
    }
}
