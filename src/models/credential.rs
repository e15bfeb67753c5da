// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Locally persisted session credential.

use std::fmt;

/// Bearer token and user identity issued at login.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Opaque bearer token
    pub token: Option<String>,
    /// Backend user ID
    pub user_id: Option<u64>,
    /// Display name of the logged-in user
    pub user_name: Option<String>,
}

impl Credential {
    pub fn new(token: impl Into<String>, user_id: Option<u64>, user_name: Option<String>) -> Self {
        Self {
            token: Some(token.into()),
            user_id,
            user_name,
        }
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user_id.is_none() && self.user_name.is_none()
    }

    /// The token to attach as a bearer credential, if any.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_id", &self.user_id)
            .field("user_name", &self.user_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let cred = Credential::new("secret-jwt", Some(7), Some("chef".to_string()));
        let out = format!("{:?}", cred);
        assert!(!out.contains("secret-jwt"));
        assert!(out.contains("<redacted>"));
        assert!(out.contains("chef"));
    }

    #[test]
    fn test_empty_token_is_not_a_bearer() {
        let cred = Credential::new("", Some(1), None);
        assert_eq!(cred.bearer(), None);
        assert!(Credential::default().is_empty());
    }
}
