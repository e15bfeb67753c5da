// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, registration and logout.

use super::api::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthRequest, AuthResponse, Credential, LoginForm};
use crate::navigation::Navigation;
use crate::validation::check;
use reqwest::Method;

/// Session lifecycle against `/api/auth`.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange username and password for a token and persist it.
    ///
    /// The credential is fully written before this returns, so calls made
    /// right after a successful login see the new token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(Credential, Navigation), ApiError> {
        let request = self.validated(username, password)?;
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

        let value = self
            .client
            .call_public(Method::POST, "/api/auth/login", Some(&body))
            .await?;
        let response: AuthResponse = serde_json::from_value(value)
            .map_err(|e| ApiError::ParseFailure(format!("Unexpected login response: {}", e)))?;

        let token = response
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::ParseFailure("Login response carried no token".to_string()))?;

        let credential = Credential {
            token: Some(token),
            user_id: response.user_id,
            user_name: response
                .username
                .filter(|name| !name.is_empty())
                .or_else(|| Some(request.username.clone())),
        };
        self.client.credentials().save(&credential)?;

        tracing::info!(user_id = ?credential.user_id, "Logged in");
        Ok((credential, Navigation::Overview))
    }

    /// Create an account. The user logs in separately afterwards.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let request = self.validated(username, password)?;
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

        self.client
            .call_public(Method::POST, "/api/auth/register", Some(&body))
            .await?;

        tracing::info!(username = %request.username, "Registered new user");
        Ok(())
    }

    /// Forget the stored session.
    pub fn logout(&self) -> Result<Navigation, ApiError> {
        self.client.credentials().clear()?;
        tracing::info!("Logged out");
        Ok(Navigation::Login)
    }

    /// The stored credential, possibly empty.
    pub fn session(&self) -> Credential {
        self.client.credentials().read()
    }

    fn validated(&self, username: &str, password: &str) -> Result<AuthRequest, ApiError> {
        let form = LoginForm {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        check(&form)?;
        Ok(AuthRequest {
            username: form.username,
            password: form.password,
        })
    }
}
