//! Credential normalization and the demo password policy

use zeroize::Zeroizing;

/// The demo credential. This is a screen-flow demo, not a security system.
pub const DEMO_PASSWORD: &str = "password";

/// Case-fold and trim a credential string before comparison.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Password acceptance policy: normalized equality against a fixed
/// expected value, so comparison is case- and whitespace-insensitive.
#[derive(Clone)]
pub struct CredentialPolicy {
    expected: Zeroizing<String>,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self::new(DEMO_PASSWORD)
    }
}

impl CredentialPolicy {
    /// Build a policy for an expected password.
    pub fn new(expected: &str) -> Self {
        Self {
            expected: Zeroizing::new(normalize(expected)),
        }
    }

    /// Check a submitted password. The normalized copy is zeroized on drop.
    pub fn verify(&self, submitted: &str) -> bool {
        let submitted = Zeroizing::new(normalize(submitted));
        *submitted == *self.expected
    }
}
