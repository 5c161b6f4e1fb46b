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
pub mod catalog;
pub mod form;
pub mod theme;

use serde::{Deserialize, Serialize};

pub use catalog::{Catalog, PendingRating};
pub use form::{normalize_image, split_ingredients, FormError, RecipeFields, RecipeForm};
pub use theme::Theme;

pub type RecipeId = i64;

/// Image shown for recipes without one of their own.
pub const PLACEHOLDER_IMAGE: &'static str = "/img/download.jpg";
/// Rooted folder the backend serves recipe images from.
pub const IMAGE_ROOT: &'static str = "/img/";

/// A Recipe record as the backend stores it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: i64,
}

impl Recipe {
    pub fn new<N: Into<String>, C: Into<String>>(id: RecipeId, name: N, category: C) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
            image: None,
            rating: 0,
        }
    }

    pub fn with_ingredients<Iter, S>(mut self, ingredients: Iter) -> Self
    where
        Iter: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(|i| i.into()));
        self
    }

    pub fn with_instructions<S: Into<String>>(mut self, instructions: S) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_image<S: Into<String>>(mut self, image: S) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = rating;
        self
    }

    /// The image to display, falling back to the placeholder when the recipe
    /// has none.
    pub fn image_src(&self) -> &str {
        match self.image.as_deref() {
            Some(img) if !img.is_empty() => img,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    pub fn ingredients_text(&self) -> String {
        self.ingredients.join(", ")
    }

    /// Split the free-text instructions into display steps with any leading
    /// `N.` numbering removed.
    pub fn instruction_steps(&self) -> Vec<String> {
        instruction_steps(&self.instructions)
    }

    pub fn rating_tier(&self) -> RatingTier {
        RatingTier::from_rating(self.rating)
    }

    /// Case-insensitive substring match against name, ingredients and category.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.ingredients.join(" ").to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// The three-way classification driving rating badge styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RatingTier {
    Low,
    Mid,
    High,
}

impl RatingTier {
    pub fn from_rating(rating: i64) -> Self {
        if rating <= 1 {
            RatingTier::Low
        } else if rating <= 3 {
            RatingTier::Mid
        } else {
            RatingTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingTier::Low => "low",
            RatingTier::Mid => "mid",
            RatingTier::High => "high",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RatingTier::Low => "rate-low",
            RatingTier::Mid => "rate-mid",
            RatingTier::High => "rate-high",
        }
    }
}

fn strip_step_number(line: &str) -> &str {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && line[digits..].starts_with('.') {
        line[digits + 1..].trim_start()
    } else {
        line
    }
}

pub fn instruction_steps(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_step_number(line).trim())
        .filter(|step| !step.is_empty())
        .map(|step| step.to_owned())
        .collect()
}

#[cfg(test)]
mod test;
