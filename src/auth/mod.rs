//! Fixed-credential login gate.
//!
//! Checks a username/password pair against the configured one. No session or
//! token is issued; the gate only guards access to the UI.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Login form submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub message: String,
}

/// The single accepted credential pair.
#[derive(Debug, Clone)]
pub struct LoginGate {
    username: String,
    password: String,
}

impl LoginGate {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a login attempt. Surrounding whitespace is ignored on both fields.
    pub fn verify(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let username = request.username.trim();
        let password = request.password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Please enter both username and password.".to_string(),
            ));
        }

        // Both comparisons always run
        let user_ok = constant_time_compare(username, &self.username);
        let pass_ok = constant_time_compare(password, &self.password);

        if user_ok & pass_ok {
            Ok(LoginResponse {
                username: username.to_string(),
                message: "Login successful! Redirecting...".to_string(),
            })
        } else {
            tracing::warn!(username = %username, "Rejected login attempt");
            Err(AppError::Unauthorized(
                "Invalid username or password. Please try again.".to_string(),
            ))
        }
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
