// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side form validation.
//!
//! Forms derive `validator::Validate`; `check` turns the first failing rule
//! into an `ApiError::InvalidInput` so no request is issued for bad input.

use crate::error::ApiError;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Key under which struct-level (schema) errors are reported.
const SCHEMA_KEY: &str = "__all__";

/// A validated form with a stable order for reporting errors.
pub trait Form: Validate {
    /// Field names in the order a user would read them on screen.
    const FIELD_ORDER: &'static [&'static str];
}

/// Validate a form, reporting the first failure in field order.
pub fn check<F: Form>(form: &F) -> Result<(), ApiError> {
    form.validate()
        .map_err(|errors| ApiError::InvalidInput(first_message(&errors, F::FIELD_ORDER)))
}

fn first_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let fields = errors.field_errors();

    order
        .iter()
        .copied()
        .chain(std::iter::once(SCHEMA_KEY))
        .find_map(|key| fields.get(key).and_then(|errs| errs.first()))
        .or_else(|| fields.values().find_map(|errs| errs.first()))
        .map(message_of)
        .unwrap_or_else(|| "Invalid input".to_string())
}

fn message_of(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}

/// Build a validation error carrying a user-facing message.
pub(crate) fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// True when the value has visible characters.
pub(crate) fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
