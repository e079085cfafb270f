//! # Admin Session
//!
//! A single shared credential gates every catalog mutation. This is a
//! prototype-grade mechanism: the secret is compared in plaintext, there is no
//! per-user account, no lockout and no expiry. Do not deploy it as real
//! authentication.
//!
//! ```text
//!   LoggedOut ──authenticate(secret) == true──▶ LoggedIn
//! ```
//!
//! There is no way back to `LoggedOut`; the session ends with the process.
//!
//! Mutations take an [`AdminGrant`], which only [`AdminSession::grant`] can
//! produce, so code holding a logged-out session cannot reach
//! [`Catalog::update`](crate::catalog::Catalog::update) at all.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Proof of a logged-in admin session.
#[derive(Debug)]
pub struct AdminGrant {
    _private: (),
}

#[derive(Debug)]
pub struct AdminSession {
    credential: String,
    state: SessionState,
}

impl AdminSession {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            state: SessionState::LoggedOut,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    /// Exact, case-sensitive comparison against the configured credential.
    /// A wrong candidate leaves the state as it was.
    pub fn authenticate(&mut self, candidate: &str) -> bool {
        if candidate == self.credential {
            self.state = SessionState::LoggedIn;
            true
        } else {
            tracing::debug!("admin login rejected");
            false
        }
    }

    pub fn grant(&self) -> Option<AdminGrant> {
        match self.state {
            SessionState::LoggedIn => Some(AdminGrant { _private: () }),
            SessionState::LoggedOut => None,
        }
    }
}
