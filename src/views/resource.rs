// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fetched resource owned by a view.

use crate::error::ApiError;
use crate::navigation::Navigation;
use chrono::{DateTime, Utc};
use std::future::Future;

/// A fetched collection or entity plus the state of its last fetch.
///
/// Refetches replace the value wholesale; optimistic updates patch it in
/// place through `value_mut`.
#[derive(Debug, Clone)]
pub struct RemoteResource<T> {
    value: Option<T>,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self {
            value: None,
            error: None,
            fetched_at: None,
        }
    }
}

impl<T> RemoteResource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Message from the last failed fetch, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    /// Replace the value with a freshly fetched one.
    pub fn replace(&mut self, value: T) {
        self.value = Some(value);
        self.error = None;
        self.fetched_at = Some(Utc::now());
    }

    /// Run `fetch` and store its result.
    ///
    /// On failure the previous value is kept and the displayable message is
    /// recorded. The returned error carries any navigation the UI must do.
    pub async fn refresh<F>(&mut self, fetch: F) -> Result<(), ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        match fetch.await {
            Ok(value) => {
                self.replace(value);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Record an error raised outside `refresh`, returning its navigation.
    pub fn fail(&mut self, err: &ApiError) -> Option<Navigation> {
        self.error = Some(err.user_message());
        err.navigation()
    }
}
