// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and authentication models.

use serde::{Deserialize, Serialize};

/// User profile returned by `GET /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "id")]
    pub user_id: u64,
    #[serde(alias = "username")]
    pub user_name: String,
    /// Profile picture URL
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Body of `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
///
/// Older backend revisions send `id`/`userName`; both spellings decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, alias = "id")]
    pub user_id: Option<u64>,
    #[serde(default, alias = "userName")]
    pub username: Option<String>,
}

/// Body of `PUT /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub user_name: String,
    pub profile_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}
