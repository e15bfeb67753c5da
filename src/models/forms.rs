// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User-entered forms and their validation rules.
//!
//! Form fields hold raw text as typed; conversion to request bodies happens
//! only after validation passes.

use super::recipe::{CreateRecipeRequest, Ingredient, RecipeImage};
use super::user::UpdateProfileRequest;
use crate::error::ApiError;
use crate::validation::{invalid, is_present, Form};
use validator::{Validate, ValidationError};

/// Minimum length of a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

// ─── Login / Register ────────────────────────────────────────

#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "username_present"))]
    pub username: String,
    #[validate(custom(function = "password_present"))]
    pub password: String,
}

impl Form for LoginForm {
    const FIELD_ORDER: &'static [&'static str] = &["username", "password"];
}

fn username_present(value: &str) -> Result<(), ValidationError> {
    require(value, "username", "Please enter a username")
}

fn password_present(value: &str) -> Result<(), ValidationError> {
    require(value, "password", "Please enter a password")
}

// ─── Recipe ──────────────────────────────────────────────────

/// One ingredient row of the create-recipe form.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    pub name: String,
    pub amount: String,
    pub unit: String,
    pub average_cooking_time: String,
}

impl Default for IngredientRow {
    fn default() -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            unit: "GRAM".to_string(),
            average_cooking_time: String::new(),
        }
    }
}

impl IngredientRow {
    fn into_ingredient(self) -> Result<Ingredient, ApiError> {
        let name = self.name.trim().to_string();

        let amount = optional(&self.amount)
            .map(|raw| {
                raw.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ApiError::InvalidInput(format!("Invalid amount for {}", name)))
            })
            .transpose()?;

        let average_cooking_time = optional(&self.average_cooking_time)
            .map(|raw| {
                raw.parse::<u32>().map_err(|_| {
                    ApiError::InvalidInput(format!("Invalid cooking time for {}", name))
                })
            })
            .transpose()?;

        Ok(Ingredient {
            id: None,
            name,
            amount,
            unit: optional(&self.unit).map(str::to_string),
            average_cooking_time,
        })
    }
}

#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "has_named_ingredient"))]
pub struct NewRecipeForm {
    #[validate(custom(function = "recipe_name_present"))]
    pub name: String,
    #[validate(custom(function = "recipe_description_present"))]
    pub description: String,
    pub enable_comments: bool,
    pub ingredients: Vec<IngredientRow>,
    pub image_urls: Vec<String>,
    pub steps: Vec<String>,
}

impl Default for NewRecipeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            enable_comments: true,
            ingredients: vec![IngredientRow::default()],
            image_urls: vec![String::new()],
            steps: vec![String::new()],
        }
    }
}

impl Form for NewRecipeForm {
    const FIELD_ORDER: &'static [&'static str] = &["name", "description"];
}

impl NewRecipeForm {
    /// Convert a validated form into the request body.
    ///
    /// Rows without a name, blank image URLs and blank steps are dropped.
    pub fn into_request(self, author_id: u64) -> Result<CreateRecipeRequest, ApiError> {
        let ingredients = self
            .ingredients
            .into_iter()
            .filter(|row| is_present(&row.name))
            .map(IngredientRow::into_ingredient)
            .collect::<Result<Vec<_>, _>>()?;

        let images = self
            .image_urls
            .iter()
            .filter_map(|url| optional(url))
            .map(|url| RecipeImage {
                id: None,
                image_url: url.to_string(),
            })
            .collect();

        let step_by_step_guide = self
            .steps
            .iter()
            .filter_map(|step| optional(step))
            .map(str::to_string)
            .collect();

        Ok(CreateRecipeRequest {
            name: self.name,
            description: self.description,
            enable_comments: self.enable_comments,
            author_id,
            ingredients,
            images,
            step_by_step_guide,
        })
    }
}

fn recipe_name_present(value: &str) -> Result<(), ValidationError> {
    require(value, "name", "Please enter a recipe name")
}

fn recipe_description_present(value: &str) -> Result<(), ValidationError> {
    require(value, "description", "Please enter a recipe description")
}

fn has_named_ingredient(form: &NewRecipeForm) -> Result<(), ValidationError> {
    if form.ingredients.iter().any(|row| is_present(&row.name)) {
        Ok(())
    } else {
        Err(invalid("ingredients", "Please add at least one ingredient"))
    }
}

// ─── Menu ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Validate)]
pub struct NewMenuForm {
    #[validate(custom(function = "menu_name_present"))]
    pub name: String,
    #[validate(custom(function = "menu_description_present"))]
    pub description: String,
    pub recipe_ids: Vec<u64>,
}

impl Form for NewMenuForm {
    const FIELD_ORDER: &'static [&'static str] = &["name", "description"];
}

impl NewMenuForm {
    /// Add or remove a recipe from the selection.
    pub fn toggle_recipe(&mut self, recipe_id: u64) {
        if let Some(pos) = self.recipe_ids.iter().position(|id| *id == recipe_id) {
            self.recipe_ids.remove(pos);
        } else {
            self.recipe_ids.push(recipe_id);
        }
    }
}

fn menu_name_present(value: &str) -> Result<(), ValidationError> {
    require(value, "name", "Please enter a menu name")
}

fn menu_description_present(value: &str) -> Result<(), ValidationError> {
    require(value, "description", "Please enter a menu description")
}

// ─── Comment ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Validate)]
pub struct CommentForm {
    #[validate(custom(function = "comment_present"))]
    pub body_text: String,
}

impl Form for CommentForm {
    const FIELD_ORDER: &'static [&'static str] = &["body_text"];
}

fn comment_present(value: &str) -> Result<(), ValidationError> {
    require(value, "body_text", "Comment cannot be empty")
}

// ─── Profile ─────────────────────────────────────────────────

/// Edit-profile form. Password fields left blank keep the current password.
#[derive(Debug, Clone, Default, Validate)]
#[validate(schema(function = "valid_password_change"))]
pub struct ProfileUpdate {
    #[validate(custom(function = "profile_name_present"))]
    pub user_name: String,
    pub profile_image: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl Form for ProfileUpdate {
    const FIELD_ORDER: &'static [&'static str] = &["user_name"];
}

impl ProfileUpdate {
    pub fn changes_password(&self) -> bool {
        !self.new_password.is_empty()
    }

    pub fn into_request(self) -> UpdateProfileRequest {
        let changes_password = self.changes_password();
        UpdateProfileRequest {
            user_name: self.user_name,
            profile_image: self.profile_image,
            current_password: changes_password.then_some(self.current_password),
            new_password: changes_password.then_some(self.new_password),
        }
    }
}

fn profile_name_present(value: &str) -> Result<(), ValidationError> {
    require(value, "user_name", "Username cannot be empty")
}

fn valid_password_change(form: &ProfileUpdate) -> Result<(), ValidationError> {
    if !form.changes_password() {
        return Ok(());
    }
    if form.new_password != form.confirm_password {
        return Err(invalid("password_mismatch", "New passwords do not match"));
    }
    if form.new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid(
            "password_length",
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────

fn require(value: &str, code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if is_present(value) {
        Ok(())
    } else {
        Err(invalid(code, message))
    }
}

/// Trimmed value, or `None` when blank.
fn optional(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}
