//! Screen renderers, one per display state

pub mod biometric;
pub mod password;
pub mod status;
pub mod welcome;
