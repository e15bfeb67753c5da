// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recipe models as exchanged with the MyDish API.

use super::null_as_default;
use serde::{Deserialize, Deserializer, Serialize};

/// Recipe card as returned by the feed endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub like_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub liked_by_current_user: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<RecipeImage>,
    #[serde(default)]
    pub step_by_step_guide: Option<Vec<String>>,
}

impl Recipe {
    /// First image URL, used as the card thumbnail.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(|img| img.image_url.as_str())
    }
}

/// Full recipe returned by `GET /api/recipes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub author_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_name: String,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub like_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub liked_by_current_user: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<RecipeImage>,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub enable_comments: bool,
    #[serde(default)]
    pub step_by_step_guide: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

fn null_as_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub amount: Option<f64>,
    /// Unit code, e.g. `GRAM`
    pub unit: Option<String>,
    /// Average cooking time in minutes
    pub average_cooking_time: Option<u32>,
}

/// Image attached to a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
}

/// Body of `POST /api/recipes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub name: String,
    pub description: String,
    pub enable_comments: bool,
    pub author_id: u64,
    pub ingredients: Vec<Ingredient>,
    pub images: Vec<RecipeImage>,
    pub step_by_step_guide: Vec<String>,
}
