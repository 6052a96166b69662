use tracing::warn;

use super::data::{Credentials, SessionToken};
use super::view_state::Status;
use crate::error::ApiError;

pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub status: Status,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and produce the request body
    ///
    /// Both fields are required; nothing is sent while either is empty or a
    /// login is already in flight. Values are sent as typed.
    pub fn submit(&mut self) -> Option<Credentials> {
        if self.status.is_loading() || self.username.is_empty() || self.password.is_empty() {
            return None;
        }

        self.status = Status::Loading;
        Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Apply the login response. Returns the token to store on success.
    pub fn finish(&mut self, result: Result<SessionToken, ApiError>) -> Option<SessionToken> {
        match result {
            Ok(token) => {
                self.password.clear();
                self.status = Status::Success;
                Some(token)
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.status = Status::Error(INVALID_CREDENTIALS.to_string());
                None
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }
}
