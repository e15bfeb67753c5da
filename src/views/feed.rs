// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recipe feed with likes and comment threads.

use super::resource::RemoteResource;
use crate::error::ApiError;
use crate::models::{Comment, LikeTarget, Recipe};
use crate::services::{
    apply_and_confirm, CommentCount, CommentService, FeedMode, LikeService, LikeState,
    RecipeService,
};

/// Comments of one recipe.
#[derive(Debug, Clone)]
pub struct CommentThread {
    pub recipe_id: u64,
    pub comments: RemoteResource<Vec<Comment>>,
}

/// The recipe overview screen.
pub struct RecipeFeed {
    recipes_api: RecipeService,
    comments_api: CommentService,
    likes_api: LikeService,
    mode: FeedMode,
    recipes: RemoteResource<Vec<Recipe>>,
    thread: Option<CommentThread>,
}

impl RecipeFeed {
    pub fn new(recipes: RecipeService, comments: CommentService, likes: LikeService) -> Self {
        Self {
            recipes_api: recipes,
            comments_api: comments,
            likes_api: likes,
            mode: FeedMode::default(),
            recipes: RemoteResource::new(),
            thread: None,
        }
    }

    pub fn mode(&self) -> FeedMode {
        self.mode
    }

    pub fn recipes(&self) -> &RemoteResource<Vec<Recipe>> {
        &self.recipes
    }

    pub fn recipe(&self, recipe_id: u64) -> Option<&Recipe> {
        self.recipes
            .value()
            .and_then(|list| list.iter().find(|r| r.id == recipe_id))
    }

    pub fn thread(&self) -> Option<&CommentThread> {
        self.thread.as_ref()
    }

    /// Refetch the recipes for the current mode.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.recipes.refresh(self.recipes_api.list(self.mode)).await
    }

    /// Switch between own and all recipes, then refetch.
    pub async fn set_mode(&mut self, mode: FeedMode) -> Result<(), ApiError> {
        self.mode = mode;
        self.refresh().await
    }

    /// Flip the current user's like on a recipe, optimistically.
    pub async fn toggle_like(&mut self, recipe_id: u64) -> Result<(), ApiError> {
        let recipe = find_mut(&mut self.recipes, recipe_id, |r| r.id)?;
        let next = LikeState::of(recipe).toggled();

        apply_and_confirm(
            recipe,
            next,
            self.likes_api
                .set_liked(LikeTarget::Recipe(recipe_id), next.liked),
        )
        .await
    }

    /// Load the comment thread of a recipe.
    pub async fn open_comments(&mut self, recipe_id: u64) -> Result<(), ApiError> {
        let thread = self.thread.insert(CommentThread {
            recipe_id,
            comments: RemoteResource::new(),
        });
        thread
            .comments
            .refresh(self.comments_api.list_for_recipe(recipe_id))
            .await
    }

    pub fn close_comments(&mut self) {
        self.thread = None;
    }

    /// Post a comment, bumping the recipe's comment count optimistically.
    ///
    /// The open thread of that recipe is reloaded after the server accepts.
    pub async fn post_comment(&mut self, recipe_id: u64, body_text: &str) -> Result<(), ApiError> {
        CommentService::validate(body_text)?;

        let recipe = find_mut(&mut self.recipes, recipe_id, |r| r.id)?;
        let patch = CommentCount::incremented(recipe);
        apply_and_confirm(
            recipe,
            patch,
            self.comments_api.post(recipe_id, body_text),
        )
        .await?;

        if let Some(thread) = self.thread.as_mut().filter(|t| t.recipe_id == recipe_id) {
            // The comment is stored; a failed reload only leaves the thread stale.
            if let Err(e) = thread
                .comments
                .refresh(self.comments_api.list_for_recipe(recipe_id))
                .await
            {
                tracing::warn!(recipe_id, error = %e, "Failed to reload comments");
            }
        }
        Ok(())
    }

    /// Flip the current user's like on a comment of the open thread.
    pub async fn toggle_comment_like(&mut self, comment_id: u64) -> Result<(), ApiError> {
        let thread = self
            .thread
            .as_mut()
            .ok_or_else(|| ApiError::InvalidInput("No comment thread is open".to_string()))?;
        let comment = find_mut(&mut thread.comments, comment_id, |c| c.id)?;
        let next = LikeState::of(comment).toggled();

        apply_and_confirm(
            comment,
            next,
            self.likes_api
                .set_liked(LikeTarget::Comment(comment_id), next.liked),
        )
        .await
    }
}

fn find_mut<T>(
    resource: &mut RemoteResource<Vec<T>>,
    id: u64,
    id_of: impl Fn(&T) -> u64,
) -> Result<&mut T, ApiError> {
    resource
        .value_mut()
        .and_then(|items| items.iter_mut().find(|item| id_of(item) == id))
        .ok_or_else(|| ApiError::InvalidInput(format!("Item {} is not loaded", id)))
}
