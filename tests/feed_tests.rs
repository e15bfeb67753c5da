// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recipe feed, comment thread and menu board tests.
//!
//! Optimistic updates must show immediately and roll back exactly when
//! the server refuses them.

use axum::http::Method;
use mydish_client::error::ApiError;
use mydish_client::models::{IngredientRow, NewMenuForm, NewRecipeForm};
use mydish_client::services::FeedMode;

mod common;
use common::{comment_json, logged_in_app, recipe_json, spawn_fake_api};

async fn loaded_feed(
    api: &common::FakeApi,
    base_url: &str,
    liked: bool,
    like_count: u32,
) -> mydish_client::views::RecipeFeed {
    api.on(
        Method::GET,
        "/api/recipes",
        200,
        format!("[{}]", recipe_json(4, liked, like_count, 2)),
    );
    let mut feed = logged_in_app(base_url).recipe_feed();
    feed.set_mode(FeedMode::Explore).await.unwrap();
    feed
}

#[tokio::test]
async fn test_feed_loads_records_with_null_fields() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(
        Method::GET,
        "/api/recipes",
        200,
        format!(
            r#"[{}, {{"id":5,"name":"Soup","description":null,"images":null,"authorName":null}}]"#,
            recipe_json(4, false, 0, 0)
        ),
    );
    api.on(
        Method::GET,
        "/api/comments/recipe/5",
        200,
        r#"[{"id":1,"bodyText":"Nice","userName":null}]"#,
    );
    let mut feed = logged_in_app(&base_url).recipe_feed();

    feed.set_mode(FeedMode::Explore).await.unwrap();
    feed.open_comments(5).await.unwrap();

    assert_eq!(feed.recipes().value().unwrap().len(), 2);
    assert_eq!(feed.recipe(5).unwrap().description, "");
    let comments = feed.thread().unwrap().comments.value().unwrap();
    assert_eq!(comments[0].user_name, "");
}

#[tokio::test]
async fn test_like_success_keeps_optimistic_state() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(Method::POST, "/api/likes", 201, r#"{"id":99}"#);
    let mut feed = loaded_feed(&api, &base_url, false, 5).await;

    feed.toggle_like(4).await.unwrap();

    let recipe = feed.recipe(4).unwrap();
    assert!(recipe.liked_by_current_user);
    assert_eq!(recipe.like_count, 6);
    assert_eq!(
        api.requests_to(Method::POST, "/api/likes")[0].json(),
        serde_json::json!({"recipeId": 4, "userId": 7})
    );
}

#[tokio::test]
async fn test_like_failure_rolls_back() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(Method::POST, "/api/likes", 500, "");
    let mut feed = loaded_feed(&api, &base_url, false, 5).await;

    let err = feed.toggle_like(4).await.unwrap_err();

    assert!(matches!(err, ApiError::RequestRejected { status: 500, .. }));
    let recipe = feed.recipe(4).unwrap();
    assert!(!recipe.liked_by_current_user);
    assert_eq!(recipe.like_count, 5);
}

#[tokio::test]
async fn test_unlike_uses_delete_route() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(Method::DELETE, "/api/likes/recipe/4/user/7", 204, "");
    let mut feed = loaded_feed(&api, &base_url, true, 3).await;

    feed.toggle_like(4).await.unwrap();

    let recipe = feed.recipe(4).unwrap();
    assert!(!recipe.liked_by_current_user);
    assert_eq!(recipe.like_count, 2);
}

#[tokio::test]
async fn test_like_expired_session_rolls_back_and_logs_out() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(Method::DELETE, "/api/likes/recipe/4/user/7", 401, "");
    let mut feed = loaded_feed(&api, &base_url, true, 3).await;

    let err = feed.toggle_like(4).await.unwrap_err();

    assert!(matches!(err, ApiError::SessionExpired));
    let recipe = feed.recipe(4).unwrap();
    assert!(recipe.liked_by_current_user);
    assert_eq!(recipe.like_count, 3);
}

#[tokio::test]
async fn test_like_unknown_recipe_is_invalid_input() {
    let (base_url, api) = spawn_fake_api().await;
    let mut feed = loaded_feed(&api, &base_url, false, 0).await;

    let err = feed.toggle_like(404).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput(_)));
    assert!(api.requests_to(Method::POST, "/api/likes").is_empty());
}

#[tokio::test]
async fn test_post_comment_bumps_count_and_reloads_thread() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(
        Method::GET,
        "/api/comments/recipe/4",
        200,
        serde_json::json!([comment_json(1, "Lovely", false, 0)]).to_string(),
    );
    api.on(Method::POST, "/api/comments", 201, "{}");
    let mut feed = loaded_feed(&api, &base_url, false, 0).await;
    feed.open_comments(4).await.unwrap();

    api.on(
        Method::GET,
        "/api/comments/recipe/4",
        200,
        serde_json::json!([
            comment_json(1, "Lovely", false, 0),
            comment_json(2, "Made it twice", false, 0)
        ])
        .to_string(),
    );
    feed.post_comment(4, "Made it twice").await.unwrap();

    assert_eq!(feed.recipe(4).unwrap().comment_count, 3);
    let thread = feed.thread().unwrap();
    assert_eq!(thread.recipe_id, 4);
    assert_eq!(thread.comments.value().unwrap().len(), 2);
    assert_eq!(
        api.requests_to(Method::POST, "/api/comments")[0].json(),
        serde_json::json!({"bodyText": "Made it twice", "recipeId": 4, "userId": 7})
    );
}

#[tokio::test]
async fn test_post_comment_failure_restores_count() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(
        Method::POST,
        "/api/comments",
        400,
        r#"{"bodyText":"Comment is too long"}"#,
    );
    let mut feed = loaded_feed(&api, &base_url, false, 0).await;

    let err = feed.post_comment(4, "x").await.unwrap_err();

    assert_eq!(err.user_message(), "Comment is too long");
    assert_eq!(feed.recipe(4).unwrap().comment_count, 2);
}

#[tokio::test]
async fn test_blank_comment_is_rejected_locally() {
    let (base_url, api) = spawn_fake_api().await;
    let mut feed = loaded_feed(&api, &base_url, false, 0).await;
    let before = api.hits();

    let err = feed.post_comment(4, "   ").await.unwrap_err();

    assert_eq!(err.user_message(), "Comment cannot be empty");
    assert_eq!(feed.recipe(4).unwrap().comment_count, 2);
    assert_eq!(api.hits(), before);
}

#[tokio::test]
async fn test_comment_like_rolls_back_on_failure() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(
        Method::GET,
        "/api/comments/recipe/4",
        200,
        serde_json::json!([comment_json(11, "Yum", false, 1)]).to_string(),
    );
    api.on(Method::POST, "/api/likes", 503, "");
    let mut feed = loaded_feed(&api, &base_url, false, 0).await;
    feed.open_comments(4).await.unwrap();

    assert!(feed.toggle_comment_like(11).await.is_err());

    let comment = &feed.thread().unwrap().comments.value().unwrap()[0];
    assert!(!comment.liked_by_current_user);
    assert_eq!(comment.like_count, 1);
    assert_eq!(
        api.requests_to(Method::POST, "/api/likes")[0].json(),
        serde_json::json!({"commentId": 11, "userId": 7})
    );
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_recipes() {
    let (base_url, api) = spawn_fake_api().await;
    let mut feed = loaded_feed(&api, &base_url, false, 0).await;
    api.on(Method::GET, "/api/recipes", 502, "");

    assert!(feed.refresh().await.is_err());

    assert_eq!(feed.recipes().value().unwrap().len(), 1);
    assert_eq!(feed.recipes().error(), Some("Bad Gateway"));
}

#[tokio::test]
async fn test_recipe_page_like_toggle() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(
        Method::GET,
        "/api/recipes/4",
        200,
        r#"{"id":4,"name":"Stew","likeCount":1,"likedByCurrentUser":false,
            "createdAt":"2025-05-14T12:30:00","enableComments":false}"#,
    );
    api.on(Method::POST, "/api/likes", 201, "{}");
    let mut page = logged_in_app(&base_url).recipe_page(4);

    page.refresh().await.unwrap();
    page.toggle_like().await.unwrap();

    let recipe = page.recipe().value().unwrap();
    assert_eq!(recipe.like_count, 2);
    assert!(recipe.liked_by_current_user);
    assert!(!recipe.enable_comments);
}

#[tokio::test]
async fn test_menu_board_create_refetches() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(Method::GET, "/api/menus", 200, "[]");
    api.on(Method::POST, "/api/menus", 201, "{}");
    let mut board = logged_in_app(&base_url).menu_board();
    board.refresh().await.unwrap();

    api.on(
        Method::GET,
        "/api/menus",
        200,
        r#"[{"id":1,"name":"Sunday","description":"Roast","recipes":[{"id":4,"name":"Stew"}]}]"#,
    );
    let mut form = NewMenuForm {
        name: "Sunday".to_string(),
        description: "Roast".to_string(),
        ..NewMenuForm::default()
    };
    form.toggle_recipe(4);
    form.toggle_recipe(5);
    form.toggle_recipe(5);
    board.create(form).await.unwrap();

    assert_eq!(
        api.requests_to(Method::POST, "/api/menus")[0].json(),
        serde_json::json!({
            "name": "Sunday",
            "description": "Roast",
            "authorId": 7,
            "recipeIds": [4]
        })
    );
    let menus = board.menus().value().unwrap();
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].recipes[0].name, "Stew");
}

#[tokio::test]
async fn test_menu_without_name_sends_nothing() {
    let (base_url, api) = spawn_fake_api().await;
    let mut board = logged_in_app(&base_url).menu_board();

    let err = board
        .create(NewMenuForm {
            description: "Roast".to_string(),
            ..NewMenuForm::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Please enter a menu name");
    assert_eq!(api.hits(), 0);
}

#[tokio::test]
async fn test_create_recipe_body() {
    let (base_url, api) = spawn_fake_api().await;
    api.on(Method::POST, "/api/recipes", 201, "{}");
    let app = logged_in_app(&base_url);

    let form = NewRecipeForm {
        name: "Pancakes".to_string(),
        description: "Fluffy".to_string(),
        ingredients: vec![
            IngredientRow {
                name: "Flour".to_string(),
                amount: "200".to_string(),
                average_cooking_time: "10".to_string(),
                ..IngredientRow::default()
            },
            IngredientRow::default(),
        ],
        steps: vec!["Mix".to_string(), " ".to_string(), "Fry".to_string()],
        ..NewRecipeForm::default()
    };
    app.recipes.create(form).await.unwrap();

    let body = api.requests_to(Method::POST, "/api/recipes")[0].json();
    assert_eq!(body["authorId"], 7);
    assert_eq!(body["enableComments"], true);
    assert_eq!(body["ingredients"].as_array().unwrap().len(), 1);
    assert_eq!(body["ingredients"][0]["name"], "Flour");
    assert_eq!(body["ingredients"][0]["unit"], "GRAM");
    assert_eq!(body["stepByStepGuide"], serde_json::json!(["Mix", "Fry"]));
    assert_eq!(body["images"], serde_json::json!([]));
}
