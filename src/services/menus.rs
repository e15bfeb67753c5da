// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Menus: named collections of recipes.

use super::api::ApiClient;
use crate::error::ApiError;
use crate::models::{CreateMenuRequest, Menu, NewMenuForm};
use crate::validation::check;
use reqwest::Method;

#[derive(Clone)]
pub struct MenuService {
    client: ApiClient,
}

impl MenuService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Menu>, ApiError> {
        self.client.get_json("/api/menus").await
    }

    pub async fn get(&self, menu_id: u64) -> Result<Menu, ApiError> {
        self.client.get_json(&format!("/api/menus/{}", menu_id)).await
    }

    pub async fn create(&self, form: NewMenuForm) -> Result<(), ApiError> {
        check(&form)?;
        let request = CreateMenuRequest {
            name: form.name,
            description: form.description,
            author_id: self.client.current_user_id()?,
            recipe_ids: form.recipe_ids,
        };

        self.client
            .send(Method::POST, "/api/menus", Some(&request))
            .await?;

        tracing::info!(name = %request.name, recipes = request.recipe_ids.len(), "Menu created");
        Ok(())
    }
}
