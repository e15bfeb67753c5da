// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recipe listing, detail and creation.

use super::api::ApiClient;
use crate::error::ApiError;
use crate::models::{NewRecipeForm, Recipe, RecipeDetail};
use crate::validation::check;
use reqwest::Method;

/// Which recipes the feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedMode {
    /// Recipes authored by the logged-in user
    #[default]
    Mine,
    /// Every recipe on the platform
    Explore,
}

#[derive(Clone)]
pub struct RecipeService {
    client: ApiClient,
}

impl RecipeService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, mode: FeedMode) -> Result<Vec<Recipe>, ApiError> {
        let path = match mode {
            FeedMode::Mine => format!("/api/recipes/user/{}", self.client.current_user_id()?),
            FeedMode::Explore => "/api/recipes".to_string(),
        };
        self.client.get_json(&path).await
    }

    pub async fn get(&self, recipe_id: u64) -> Result<RecipeDetail, ApiError> {
        self.client
            .get_json(&format!("/api/recipes/{}", recipe_id))
            .await
    }

    /// Validate and submit a new recipe authored by the logged-in user.
    pub async fn create(&self, form: NewRecipeForm) -> Result<(), ApiError> {
        check(&form)?;
        let author_id = self.client.current_user_id()?;
        let request = form.into_request(author_id)?;

        self.client
            .send(Method::POST, "/api/recipes", Some(&request))
            .await?;

        tracing::info!(name = %request.name, "Recipe created");
        Ok(())
    }
}
