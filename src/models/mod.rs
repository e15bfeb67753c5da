// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the MyDish API and local session state.

pub mod comment;
pub mod credential;
pub mod forms;
pub mod menu;
pub mod recipe;
pub mod user;

pub use comment::{Comment, CreateCommentRequest, CreateLikeRequest, LikeTarget};
pub use credential::Credential;
pub use forms::{CommentForm, IngredientRow, LoginForm, NewMenuForm, NewRecipeForm, ProfileUpdate};
pub use menu::{CreateMenuRequest, Menu, MenuRecipe};
pub use recipe::{CreateRecipeRequest, Ingredient, Recipe, RecipeDetail, RecipeImage};
pub use user::{AuthRequest, AuthResponse, UpdateProfileRequest, UserProfile};

use serde::{Deserialize, Deserializer};

/// Decode an explicit JSON `null` as the type's default.
///
/// `#[serde(default)]` only covers a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
