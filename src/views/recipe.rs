// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single recipe page.

use super::resource::RemoteResource;
use crate::error::ApiError;
use crate::models::{LikeTarget, RecipeDetail};
use crate::services::{apply_and_confirm, LikeService, LikeState, RecipeService};

pub struct RecipePage {
    recipe_id: u64,
    recipes_api: RecipeService,
    likes_api: LikeService,
    recipe: RemoteResource<RecipeDetail>,
}

impl RecipePage {
    pub fn new(recipe_id: u64, recipes: RecipeService, likes: LikeService) -> Self {
        Self {
            recipe_id,
            recipes_api: recipes,
            likes_api: likes,
            recipe: RemoteResource::new(),
        }
    }

    pub fn recipe(&self) -> &RemoteResource<RecipeDetail> {
        &self.recipe
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.recipe
            .refresh(self.recipes_api.get(self.recipe_id))
            .await
    }

    pub async fn toggle_like(&mut self) -> Result<(), ApiError> {
        let recipe_id = self.recipe_id;
        let recipe = self
            .recipe
            .value_mut()
            .ok_or_else(|| ApiError::InvalidInput(format!("Recipe {} is not loaded", recipe_id)))?;
        let next = LikeState::of(recipe).toggled();

        apply_and_confirm(
            recipe,
            next,
            self.likes_api
                .set_liked(LikeTarget::Recipe(recipe_id), next.liked),
        )
        .await
    }
}
