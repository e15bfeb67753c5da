// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - session, transport and API operations.

pub mod api;
pub mod auth;
pub mod comments;
pub mod credentials;
pub mod menus;
pub mod optimistic;
pub mod profile;
pub mod recipes;
pub mod storage;

pub use api::ApiClient;
pub use auth::AuthService;
pub use comments::{CommentService, LikeService};
pub use credentials::CredentialStore;
pub use menus::MenuService;
pub use optimistic::{apply_and_confirm, CommentCount, LikeState, Patch};
pub use profile::ProfileService;
pub use recipes::{FeedMode, RecipeService};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
