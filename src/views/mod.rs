// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View state for the app screens, independent of any UI toolkit.

pub mod feed;
pub mod menus;
pub mod recipe;
pub mod resource;

pub use feed::{CommentThread, RecipeFeed};
pub use menus::MenuBoard;
pub use recipe::RecipePage;
pub use resource::RemoteResource;
