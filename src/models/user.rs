//! User model
//!
//! An identified submitter. Users are created the first time a handle is
//! seen; anonymous submissions carry no user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// Maximum handle length
pub const MAX_HANDLE_LEN: usize = 32;

/// An identified submitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Login handle, unique case-insensitively
    pub handle: String,

    /// Display name
    pub name: String,

    /// Profile picture URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// When the user first appeared
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user whose display name defaults to the handle
    pub fn new(handle: impl Into<String>) -> Self {
        let handle = handle.into().trim().to_string();
        Self {
            id: UserId::new(),
            name: handle.clone(),
            handle,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    /// Normalize a handle for lookups
    pub fn normalize_handle(handle: &str) -> String {
        handle.trim().to_lowercase()
    }

    /// Validate the user
    pub fn validate(&self) -> Result<(), UserValidationError> {
        let handle = self.handle.trim();
        if handle.is_empty() {
            return Err(UserValidationError::EmptyHandle);
        }
        if handle.len() > MAX_HANDLE_LEN {
            return Err(UserValidationError::HandleTooLong(handle.len()));
        }
        if let Some(c) = handle
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_' || *c == '.'))
        {
            return Err(UserValidationError::InvalidCharacter(c));
        }
        if self.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyHandle,
    HandleTooLong(usize),
    InvalidCharacter(char),
    EmptyName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHandle => write!(f, "User handle cannot be empty"),
            Self::HandleTooLong(len) => write!(
                f,
                "User handle too long ({} chars, max {})",
                len, MAX_HANDLE_LEN
            ),
            Self::InvalidCharacter(c) => {
                write!(f, "User handle contains invalid character '{}'", c)
            }
            Self::EmptyName => write!(f, "User name cannot be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(" river_kid ");
        assert_eq!(user.handle, "river_kid");
        assert_eq!(user.name, "river_kid");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert_eq!(User::new("").validate(), Err(UserValidationError::EmptyHandle));
        assert_eq!(
            User::new("a b").validate(),
            Err(UserValidationError::InvalidCharacter(' '))
        );
        assert!(matches!(
            User::new("x".repeat(40)).validate(),
            Err(UserValidationError::HandleTooLong(40))
        ));
    }

    #[test]
    fn test_normalize_handle() {
        assert_eq!(User::normalize_handle("  Sam.Lee "), "sam.lee");
    }
}
