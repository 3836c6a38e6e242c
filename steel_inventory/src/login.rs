//! Login gate shown before the inventory screen.
//!
//! This is a placeholder, not a security boundary: it accepts one configured
//! operator name with an empty password. Replace the [`Authenticator`] impl
//! when real authentication is needed.

use crate::error::LoginError;

pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> Result<(), LoginError>;
}

/// Accepts only the configured operator name with an empty password
pub struct PlaceholderGate {
    operator: String,
}

impl PlaceholderGate {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
        }
    }
}

impl Authenticator for PlaceholderGate {
    fn authenticate(&self, username: &str, password: &str) -> Result<(), LoginError> {
        if username == self.operator && password.is_empty() {
            log::info!("Operator {username} logged in");
            Ok(())
        } else {
            log::warn!("Rejected login attempt for {username:?}");
            Err(LoginError::InvalidCredentials)
        }
    }
}
