// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Menu models: named collections of recipes.

use super::recipe::RecipeImage;
use super::null_as_default;
use serde::{Deserialize, Serialize};

/// Menu as returned by `GET /api/menus` and `GET /api/menus/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub author_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipes: Vec<MenuRecipe>,
}

/// Recipe summary embedded in a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecipe {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub like_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<RecipeImage>,
}

/// Body of `POST /api/menus`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuRequest {
    pub name: String,
    pub description: String,
    pub author_id: u64,
    pub recipe_ids: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_tolerates_null_fields() {
        let json = r#"{"id":1,"name":"Sunday","description":null,
            "recipes":[{"id":4,"name":"Stew","description":null,"images":null}]}"#;
        let menu: Menu = serde_json::from_str(json).unwrap();

        assert_eq!(menu.description, "");
        assert_eq!(menu.recipes[0].description, "");
        assert!(menu.recipes[0].images.is_empty());

        let empty: Menu = serde_json::from_str(r#"{"id":2,"name":"Empty","recipes":null}"#).unwrap();
        assert!(empty.recipes.is_empty());
    }
}
