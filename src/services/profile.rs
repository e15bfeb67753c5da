// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The logged-in user's profile.

use super::api::ApiClient;
use crate::error::ApiError;
use crate::models::{ProfileUpdate, UserProfile};
use crate::validation::check;
use reqwest::Method;

#[derive(Clone)]
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<UserProfile, ApiError> {
        let user_id = self.client.current_user_id()?;
        self.client
            .get_json(&format!("/api/users/{}", user_id))
            .await
    }

    /// Validate and apply a profile edit, then re-fetch the profile.
    ///
    /// The stored user name follows the accepted rename.
    pub async fn update(&self, form: ProfileUpdate) -> Result<UserProfile, ApiError> {
        check(&form)?;
        let user_id = self.client.current_user_id()?;
        let changes_password = form.changes_password();
        let request = form.into_request();

        self.client
            .send(Method::PUT, &format!("/api/users/{}", user_id), Some(&request))
            .await?;

        self.client
            .credentials()
            .set_user_name(&request.user_name)?;
        tracing::info!(user_id, changes_password, "Profile updated");

        self.get().await
    }
}
