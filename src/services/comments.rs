// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Comments and likes.

use super::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Comment, CommentForm, CreateCommentRequest, CreateLikeRequest, LikeTarget};
use crate::validation::check;
use reqwest::Method;

#[derive(Clone)]
pub struct CommentService {
    client: ApiClient,
}

impl CommentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_for_recipe(&self, recipe_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.client
            .get_json(&format!("/api/comments/recipe/{}", recipe_id))
            .await
    }

    /// Check a comment body without sending it.
    pub fn validate(body_text: &str) -> Result<(), ApiError> {
        check(&CommentForm {
            body_text: body_text.to_string(),
        })
    }

    pub async fn post(&self, recipe_id: u64, body_text: &str) -> Result<(), ApiError> {
        Self::validate(body_text)?;
        let request = CreateCommentRequest {
            body_text: body_text.to_string(),
            recipe_id,
            user_id: self.client.current_user_id()?,
        };

        self.client
            .send(Method::POST, "/api/comments", Some(&request))
            .await
    }
}

#[derive(Clone)]
pub struct LikeService {
    client: ApiClient,
}

impl LikeService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn like(&self, target: LikeTarget) -> Result<(), ApiError> {
        let request = CreateLikeRequest::new(target, self.client.current_user_id()?);
        self.client
            .send(Method::POST, "/api/likes", Some(&request))
            .await
    }

    pub async fn unlike(&self, target: LikeTarget) -> Result<(), ApiError> {
        let user_id = self.client.current_user_id()?;
        let path = match target {
            LikeTarget::Recipe(id) => format!("/api/likes/recipe/{}/user/{}", id, user_id),
            LikeTarget::Comment(id) => format!("/api/likes/comment/{}/user/{}", id, user_id),
        };
        self.client.send::<()>(Method::DELETE, &path, None).await
    }

    /// Like or unlike depending on the current flag.
    pub async fn set_liked(&self, target: LikeTarget, liked: bool) -> Result<(), ApiError> {
        if liked {
            self.like(target).await
        } else {
            self.unlike(target).await
        }
    }
}
