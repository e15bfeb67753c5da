// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Comment and like models.

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// Comment on a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub body_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(default)]
    pub user_id: Option<u64>,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub like_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub liked_by_current_user: bool,
}

/// Body of `POST /api/comments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub body_text: String,
    pub recipe_id: u64,
    pub user_id: u64,
}

/// Thing a like can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Recipe(u64),
    Comment(u64),
}

/// Body of `POST /api/likes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLikeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<u64>,
    pub user_id: u64,
}

impl CreateLikeRequest {
    pub fn new(target: LikeTarget, user_id: u64) -> Self {
        match target {
            LikeTarget::Recipe(id) => Self {
                recipe_id: Some(id),
                comment_id: None,
                user_id,
            },
            LikeTarget::Comment(id) => Self {
                recipe_id: None,
                comment_id: Some(id),
                user_id,
            },
        }
    }
}
