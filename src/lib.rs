// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! MyDish client: recipes, menus, likes and comments from the MyDish API.
//!
//! This crate provides the session-gated API client behind the MyDish
//! app screens: a persisted credential, an authenticated fetcher with a
//! closed error taxonomy, and optimistic local updates.

pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod services;
pub mod time_utils;
pub mod validation;
pub mod views;

use config::Config;
use services::{
    ApiClient, AuthService, CommentService, CredentialStore, FileStore, LikeService, MenuService,
    ProfileService, RecipeService,
};
use std::sync::Arc;
use views::{MenuBoard, RecipeFeed, RecipePage};

/// Shared client state: one API client and the services built on it.
#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub auth: AuthService,
    pub recipes: RecipeService,
    pub menus: MenuService,
    pub comments: CommentService,
    pub likes: LikeService,
    pub profile: ProfileService,
}

impl AppState {
    /// Build the services around a credential store.
    pub fn new(api_base_url: &str, credentials: CredentialStore) -> Self {
        let client = ApiClient::new(api_base_url, credentials);
        Self {
            auth: AuthService::new(client.clone()),
            recipes: RecipeService::new(client.clone()),
            menus: MenuService::new(client.clone()),
            comments: CommentService::new(client.clone()),
            likes: LikeService::new(client.clone()),
            profile: ProfileService::new(client.clone()),
            client,
        }
    }

    /// Services persisting the credential in the configured file.
    pub fn from_config(config: &Config) -> Self {
        let store = FileStore::new(&config.credentials_path);
        Self::new(&config.api_base_url, CredentialStore::new(Arc::new(store)))
    }

    pub fn recipe_feed(&self) -> RecipeFeed {
        RecipeFeed::new(
            self.recipes.clone(),
            self.comments.clone(),
            self.likes.clone(),
        )
    }

    pub fn recipe_page(&self, recipe_id: u64) -> RecipePage {
        RecipePage::new(recipe_id, self.recipes.clone(), self.likes.clone())
    }

    pub fn menu_board(&self) -> MenuBoard {
        MenuBoard::new(self.menus.clone(), self.recipes.clone())
    }
}
