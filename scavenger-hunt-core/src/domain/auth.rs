use crate::config::AuthConfig;
use std::fmt;

/// Passwords known from public breach lists
const BREACHED_PASSWORDS: &[&str] = &["admin123", "password123", "123456", "qwerty"];

pub const BREACH_WARNING: &str =
    "This password was found in a data breach. Please change your password.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Result of checking a credential pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    /// Rejected, and the password appears on a breach list
    BreachedPassword,
    Denied,
}

impl LoginOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, LoginOutcome::Granted)
    }

    /// Message shown to the user for a rejected login
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoginOutcome::Granted => None,
            LoginOutcome::BreachedPassword => Some(BREACH_WARNING),
            LoginOutcome::Denied => Some(INVALID_CREDENTIALS),
        }
    }
}

/// Gate in front of the admin area
#[derive(Clone, PartialEq, Eq)]
pub struct AuthGate {
    config: AuthConfig,
    authenticated: bool,
    error: Option<String>,
}

impl fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGate")
            .field("username", &self.config.username)
            .field("authenticated", &self.authenticated)
            .field("error", &self.error)
            .finish()
    }
}

impl AuthGate {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            authenticated: false,
            error: None,
        }
    }

    /// Check credentials without touching session state.
    ///
    /// An unset (empty) configured password never matches.
    pub fn verify(&self, username: &str, password: &str) -> LoginOutcome {
        let configured = !self.config.password.is_empty();

        if configured && username == self.config.username && password == self.config.password {
            LoginOutcome::Granted
        } else if BREACHED_PASSWORDS.contains(&password) {
            LoginOutcome::BreachedPassword
        } else {
            LoginOutcome::Denied
        }
    }

    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let outcome = self.verify(username, password);

        self.authenticated = outcome.is_granted();
        self.error = outcome.message().map(str::to_string);

        match outcome {
            LoginOutcome::Granted => tracing::info!("Admin '{}' logged in", username),
            LoginOutcome::BreachedPassword => {
                tracing::warn!("Login for '{}' rejected: breached password", username)
            }
            LoginOutcome::Denied => tracing::info!("Login for '{}' rejected", username),
        }

        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        self.error = None;
        tracing::info!("Admin logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Message from the last failed login
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
