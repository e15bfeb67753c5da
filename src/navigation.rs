// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Navigation intents handed to the UI layer.

/// Where the front end should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Back to the login screen; the session is gone.
    Login,
    /// The recipe overview, after a successful login.
    Overview,
}
