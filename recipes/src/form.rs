// Copyright 2021 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fmt;

use crate::{Recipe, IMAGE_ROOT};

/// Raw text of the create/edit form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub name: String,
    pub category: String,
    pub ingredients: String,
    pub instructions: String,
    pub image: String,
}

/// Validated and normalized form values ready to send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFields {
    pub name: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingField(&'static str),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(_) => write!(f, "Please fill all fields."),
        }
    }
}

impl std::error::Error for FormError {}

impl RecipeForm {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            ingredients: recipe.ingredients_text(),
            instructions: recipe.instructions.clone(),
            image: recipe.image.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<RecipeFields, FormError> {
        let name = self.name.trim();
        let category = self.category.trim();
        if name.is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if category.is_empty() {
            return Err(FormError::MissingField("category"));
        }
        if self.ingredients.is_empty() {
            return Err(FormError::MissingField("ingredients"));
        }
        if self.instructions.is_empty() {
            return Err(FormError::MissingField("instructions"));
        }
        Ok(RecipeFields {
            name: name.to_owned(),
            category: category.to_owned(),
            ingredients: split_ingredients(&self.ingredients),
            instructions: self.instructions.clone(),
            image: normalize_image(&self.image),
        })
    }
}

pub fn split_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_owned())
        .collect()
}

fn is_absolute_url(image: &str) -> bool {
    let lower = image.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Root image paths given relative to the image folder. Everything else is
/// passed through untouched.
pub fn normalize_image(image: &str) -> Option<String> {
    let image = image.trim();
    if image.is_empty() {
        return None;
    }
    if image.starts_with(IMAGE_ROOT) || is_absolute_url(image) {
        return Some(image.to_owned());
    }
    if image.starts_with(&IMAGE_ROOT[1..]) {
        return Some(format!("/{}", image));
    }
    Some(image.to_owned())
}
