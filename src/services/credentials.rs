// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Credential store: the persisted session token and user identity.

use super::storage::{KeyValueStore, MemoryStore, StorageError};
use crate::models::Credential;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "jwtToken";
/// Storage key for the user ID.
pub const USER_ID_KEY: &str = "userId";
/// Storage key for the user name.
pub const USER_NAME_KEY: &str = "username";

const ALL_KEYS: [&str; 3] = [TOKEN_KEY, USER_ID_KEY, USER_NAME_KEY];

/// Injectable handle to the stored credential.
///
/// Clones share the same backend.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn KeyValueStore>,
    /// Set when an expired session could not be removed from the backend.
    /// While set, reads see no credential.
    expired: Arc<AtomicBool>,
}

impl CredentialStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            expired: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Persist every field of `credential` in one write.
    ///
    /// Absent fields are removed so a stale value from a previous session
    /// cannot leak into this one. Returns once the write has completed.
    pub fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        let mut present: Vec<(&str, String)> = Vec::with_capacity(ALL_KEYS.len());
        let mut absent: Vec<&str> = Vec::new();

        match &credential.token {
            Some(token) => present.push((TOKEN_KEY, token.clone())),
            None => absent.push(TOKEN_KEY),
        }
        match credential.user_id {
            Some(id) => present.push((USER_ID_KEY, id.to_string())),
            None => absent.push(USER_ID_KEY),
        }
        match &credential.user_name {
            Some(name) => present.push((USER_NAME_KEY, name.clone())),
            None => absent.push(USER_NAME_KEY),
        }

        self.backend.update(&present, &absent)?;
        self.expired.store(false, Ordering::Release);

        tracing::debug!(user_id = ?credential.user_id, "Credential saved");
        Ok(())
    }

    /// Current credential. Never fails: unreadable storage reads as empty.
    pub fn read(&self) -> Credential {
        if self.expired.load(Ordering::Acquire) {
            return Credential::default();
        }

        let values = match self.backend.get_many(&ALL_KEYS) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(error = %e, "Credential storage unreadable");
                return Credential::default();
            }
        };

        let mut values = values.into_iter();
        let token = values.next().flatten();
        let user_id = values.next().flatten().and_then(|raw| match raw.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(value = %raw, "Ignoring non-numeric stored user ID");
                None
            }
        });
        let user_name = values.next().flatten();

        Credential {
            token,
            user_id,
            user_name,
        }
    }

    /// Remove every field in one write. Clearing an empty store is a no-op.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove_many(&ALL_KEYS)?;
        self.expired.store(false, Ordering::Release);
        tracing::debug!("Credential cleared");
        Ok(())
    }

    /// Drop a session the server rejected.
    ///
    /// If the backend cannot be cleared, the stale credential is still
    /// hidden from every reader of this store until the next `save`.
    pub fn expire(&self) -> Result<(), StorageError> {
        self.clear().inspect_err(|_| {
            self.expired.store(true, Ordering::Release);
        })
    }

    /// Replace only the stored user name, e.g. after a profile rename.
    pub fn set_user_name(&self, user_name: &str) -> Result<(), StorageError> {
        self.backend
            .set_many(&[(USER_NAME_KEY, user_name.to_string())])
    }
}
