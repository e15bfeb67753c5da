// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MyDish API client: the authenticated fetcher.
//!
//! Handles:
//! - Bearer token attachment from the credential store
//! - Uniform classification of every response into `ApiError`
//! - Clearing the stored credential when the server rejects the token

use super::credentials::CredentialStore;
use crate::error::{normalize_error_message, ApiError};
use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://hovedopgave-mydish-production.up.railway.app";

/// MyDish API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
}

impl ApiClient {
    /// Create a client for `base_url` that reads its token from `credentials`.
    pub fn new(base_url: impl Into<String>, credentials: CredentialStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// ID of the logged-in user. Without one the session is unusable.
    pub fn current_user_id(&self) -> Result<u64, ApiError> {
        let credential = self.credentials.read();
        match (credential.bearer(), credential.user_id) {
            (Some(_), Some(id)) => Ok(id),
            _ => Err(ApiError::Unauthenticated),
        }
    }

    /// Issue an authenticated request and return the JSON body.
    ///
    /// Without a stored token this fails with `Unauthenticated` before any
    /// network traffic. A 401 clears the credential store before
    /// `SessionExpired` is returned.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let credential = self.credentials.read();
        let Some(token) = credential.bearer() else {
            tracing::debug!(%method, path, "No token stored, refusing authenticated call");
            return Err(ApiError::Unauthenticated);
        };

        let request = self.request(method.clone(), path, body).bearer_auth(token);
        let response = self.dispatch(request, &method, path).await?;
        self.classify(response, true).await
    }

    /// Issue a request without credentials (login, register).
    ///
    /// A 401 here rejects the submitted credentials, not a session, so it
    /// is reported as `RequestRejected` and the store is left alone.
    pub async fn call_public(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let request = self.request(method.clone(), path, body);
        let response = self.dispatch(request, &method, path).await?;
        self.classify(response, false).await
    }

    /// Authenticated GET decoded into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.call(Method::GET, path, None).await?;
        decode(value)
    }

    /// Authenticated request with a JSON body, response decoded into `T`.
    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let value = self.call(method, path, Some(&encode(body)?)).await?;
        decode(value)
    }

    /// Authenticated request whose response body is not needed.
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        let body = body.map(encode).transpose()?;
        self.call(method, path, body.as_ref()).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .http
            .request(method, &url)
            .header(header::ACCEPT, "application/json");

        match body {
            Some(body) => builder.json(body),
            None => builder,
        }
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        method: &Method,
        path: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "MyDish API unreachable");
            ApiError::NetworkUnavailable(e.to_string())
        })?;

        tracing::debug!(%method, path, status = response.status().as_u16(), "MyDish API response");
        Ok(response)
    }

    /// Check response status and parse the JSON body.
    async fn classify(
        &self,
        response: reqwest::Response,
        authenticated: bool,
    ) -> Result<Value, ApiError> {
        let status = response.status();

        // Session rejected - the token must not be reused
        if authenticated && status == StatusCode::UNAUTHORIZED {
            tracing::warn!("MyDish API rejected token (401), clearing session");
            if let Err(e) = self.credentials.expire() {
                tracing::error!(error = %e, "Failed to clear expired credential, hiding it in memory");
            }
            return Err(ApiError::SessionExpired);
        }

        let body = response.text().await.map_err(|e| {
            if status.is_success() {
                ApiError::ParseFailure(format!("Failed to read response body: {}", e))
            } else {
                ApiError::NetworkUnavailable(e.to_string())
            }
        })?;

        if !status.is_success() {
            let message = normalize_error_message(status, &body);
            tracing::debug!(status = status.as_u16(), %message, "MyDish API rejected request");
            return Err(ApiError::RequestRejected {
                status: status.as_u16(),
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::ParseFailure(format!("JSON parse error: {}", e)))
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::InvalidInput(format!("Unserializable request body: {}", e)))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::ParseFailure(format!("Unexpected response shape: {}", e)))
}
