// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Menu overview and the create-menu flow.

use super::resource::RemoteResource;
use crate::error::ApiError;
use crate::models::{Menu, NewMenuForm, Recipe};
use crate::services::{FeedMode, MenuService, RecipeService};

pub struct MenuBoard {
    menus_api: MenuService,
    recipes_api: RecipeService,
    menus: RemoteResource<Vec<Menu>>,
    /// Recipes offered when composing a menu
    available_recipes: RemoteResource<Vec<Recipe>>,
}

impl MenuBoard {
    pub fn new(menus: MenuService, recipes: RecipeService) -> Self {
        Self {
            menus_api: menus,
            recipes_api: recipes,
            menus: RemoteResource::new(),
            available_recipes: RemoteResource::new(),
        }
    }

    pub fn menus(&self) -> &RemoteResource<Vec<Menu>> {
        &self.menus
    }

    pub fn available_recipes(&self) -> &RemoteResource<Vec<Recipe>> {
        &self.available_recipes
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.menus.refresh(self.menus_api.list()).await
    }

    /// Load every recipe so the user can pick some for a new menu.
    pub async fn load_available_recipes(&mut self) -> Result<(), ApiError> {
        self.available_recipes
            .refresh(self.recipes_api.list(FeedMode::Explore))
            .await
    }

    /// Create a menu and refetch the list once the server accepts it.
    pub async fn create(&mut self, form: NewMenuForm) -> Result<(), ApiError> {
        self.menus_api.create(form).await?;
        self.refresh().await
    }
}
