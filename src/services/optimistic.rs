// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Optimistic local updates confirmed or rolled back by the server.
//!
//! The local patch is visible immediately. When the server call fails the
//! inverse patch restores the exact previous values; when it succeeds the
//! patched state is kept and no reconciliation fetch is made.
//!
//! Toggles on the same entity are not coalesced. Keeping at most one
//! request in flight per entity is up to the caller.

use crate::error::ApiError;
use crate::models::{Comment, Recipe, RecipeDetail};
use std::future::Future;

/// A local change that can be applied to a `T`.
pub trait Patch<T> {
    /// Apply the patch and return the patch that undoes it.
    fn apply(&self, target: &mut T) -> Self
    where
        Self: Sized;
}

/// Apply `patch` to `state`, then await `server_call`.
///
/// `server_call` is a future, and futures do nothing until polled, so the
/// request is issued only after the patch is in place. The `&mut` borrow
/// spans the await: patch and rollback happen on the same task with no
/// other writer in between.
pub async fn apply_and_confirm<T, P, F, R>(
    state: &mut T,
    patch: P,
    server_call: F,
) -> Result<R, ApiError>
where
    P: Patch<T>,
    F: Future<Output = Result<R, ApiError>>,
{
    let undo = patch.apply(state);

    match server_call.await {
        Ok(confirmed) => Ok(confirmed),
        Err(err) => {
            tracing::warn!(error = %err, "Server rejected optimistic update, rolling back");
            undo.apply(state);
            Err(err)
        }
    }
}

// ─── Likes ───────────────────────────────────────────────────

/// Like flag and counter of a likeable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub like_count: u32,
}

impl LikeState {
    pub fn of<T: Likeable>(target: &T) -> Self {
        target.like_state()
    }

    /// The state after the current user flips their like.
    pub fn toggled(self) -> Self {
        if self.liked {
            Self {
                liked: false,
                like_count: self.like_count.saturating_sub(1),
            }
        } else {
            Self {
                liked: true,
                like_count: self.like_count.saturating_add(1),
            }
        }
    }
}

/// Entities carrying a like flag and counter.
pub trait Likeable {
    fn like_state(&self) -> LikeState;
    fn set_like_state(&mut self, state: LikeState);
}

impl<T: Likeable> Patch<T> for LikeState {
    fn apply(&self, target: &mut T) -> Self {
        let previous = target.like_state();
        target.set_like_state(*self);
        previous
    }
}

impl Likeable for LikeState {
    fn like_state(&self) -> LikeState {
        *self
    }

    fn set_like_state(&mut self, state: LikeState) {
        *self = state;
    }
}

macro_rules! impl_likeable {
    ($($ty:ty),*) => {
        $(
            impl Likeable for $ty {
                fn like_state(&self) -> LikeState {
                    LikeState {
                        liked: self.liked_by_current_user,
                        like_count: self.like_count,
                    }
                }

                fn set_like_state(&mut self, state: LikeState) {
                    self.liked_by_current_user = state.liked;
                    self.like_count = state.like_count;
                }
            }
        )*
    };
}

impl_likeable!(Recipe, RecipeDetail, Comment);

// ─── Comment counts ──────────────────────────────────────────

/// Comment counter value to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentCount(pub u32);

impl CommentCount {
    /// The count after one more comment is posted.
    pub fn incremented<T: Commentable>(target: &T) -> Self {
        Self(target.comment_count().saturating_add(1))
    }
}

/// Entities carrying a comment counter.
pub trait Commentable {
    fn comment_count(&self) -> u32;
    fn set_comment_count(&mut self, count: u32);
}

impl<T: Commentable> Patch<T> for CommentCount {
    fn apply(&self, target: &mut T) -> Self {
        let previous = CommentCount(target.comment_count());
        target.set_comment_count(self.0);
        previous
    }
}

impl Commentable for Recipe {
    fn comment_count(&self) -> u32 {
        self.comment_count
    }

    fn set_comment_count(&mut self, count: u32) {
        self.comment_count = count;
    }
}

impl Commentable for RecipeDetail {
    fn comment_count(&self) -> u32 {
        self.comment_count
    }

    fn set_comment_count(&mut self, count: u32) {
        self.comment_count = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use std::sync::Arc;

    fn rejected() -> ApiError {
        ApiError::RequestRejected {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    #[tokio::test]
    async fn test_failed_confirmation_rolls_back_exactly() {
        let mut state = LikeState {
            liked: false,
            like_count: 5,
        };
        let patch = LikeState {
            liked: true,
            like_count: 6,
        };

        let result = apply_and_confirm(&mut state, patch, async { Err::<(), _>(rejected()) }).await;

        assert!(result.is_err());
        assert_eq!(
            state,
            LikeState {
                liked: false,
                like_count: 5
            }
        );
    }

    #[tokio::test]
    async fn test_successful_confirmation_keeps_patch() {
        let calls = AtomicUsize::new(0);
        let mut state = LikeState {
            liked: false,
            like_count: 5,
        };
        let patch = LikeState {
            liked: true,
            like_count: 6,
        };

        apply_and_confirm(&mut state, patch, async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(
            state,
            LikeState {
                liked: true,
                like_count: 6
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1, "no reconciliation call");
    }

    #[tokio::test]
    async fn test_patch_visible_before_server_answers() {
        let shared = Arc::new(AtomicU32::new(2));
        let mut holder = SharedCount(shared.clone());
        let patch = CommentCount::incremented(&holder);

        let seen_by_server = apply_and_confirm(&mut holder, patch, async {
            Ok::<_, ApiError>(shared.load(Ordering::SeqCst))
        })
        .await
        .unwrap();

        assert_eq!(seen_by_server, 3);
        assert_eq!(holder.comment_count(), 3);
    }

    #[tokio::test]
    async fn test_comment_count_rollback() {
        let mut count = CommentCountHolder(7);
        let patch = CommentCount::incremented(&count);

        let result = apply_and_confirm(&mut count, patch, async {
            Err::<(), _>(ApiError::NetworkUnavailable("connection refused".to_string()))
        })
        .await;

        assert!(matches!(result, Err(ApiError::NetworkUnavailable(_))));
        assert_eq!(count.0, 7);
    }

    #[test]
    fn test_toggle_never_underflows() {
        let state = LikeState {
            liked: true,
            like_count: 0,
        };
        assert_eq!(
            state.toggled(),
            LikeState {
                liked: false,
                like_count: 0
            }
        );
    }

    #[test]
    fn test_like_patch_on_comment() {
        let mut comment = Comment {
            id: 1,
            body_text: "Nice".to_string(),
            user_name: "bo".to_string(),
            user_id: Some(2),
            created: None,
            like_count: 3,
            liked_by_current_user: true,
        };

        let undo = LikeState::of(&comment).toggled().apply(&mut comment);
        assert!(!comment.liked_by_current_user);
        assert_eq!(comment.like_count, 2);

        undo.apply(&mut comment);
        assert!(comment.liked_by_current_user);
        assert_eq!(comment.like_count, 3);
    }

    struct SharedCount(Arc<AtomicU32>);

    impl Commentable for SharedCount {
        fn comment_count(&self) -> u32 {
            self.0.load(Ordering::SeqCst)
        }

        fn set_comment_count(&mut self, count: u32) {
            self.0.store(count, Ordering::SeqCst);
        }
    }

    struct CommentCountHolder(u32);

    impl Commentable for CommentCountHolder {
        fn comment_count(&self) -> u32 {
            self.0
        }

        fn set_comment_count(&mut self, count: u32) {
            self.0 = count;
        }
    }
}
