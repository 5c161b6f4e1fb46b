// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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
use serde::{Deserialize, Serialize};

use recipes::{RecipeFields, RecipeId};

pub const RECIPES_PATH: &'static str = "/recipes";

pub fn recipe_path(id: RecipeId) -> String {
    format!("{}/{}", RECIPES_PATH, id)
}

pub fn rating_path(id: RecipeId) -> String {
    format!("{}/{}/rating", RECIPES_PATH, id)
}

/// Body of `POST /recipes`. The client assigns the id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub id: RecipeId,
    pub name: String,
    pub category: String,
    pub rating: i64,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: Option<String>,
}

impl NewRecipe {
    pub fn new(id: RecipeId, fields: RecipeFields) -> Self {
        let RecipeFields {
            name,
            category,
            ingredients,
            instructions,
            image,
        } = fields;
        Self {
            id,
            name,
            category,
            rating: 0,
            ingredients,
            instructions,
            image,
        }
    }
}

/// Body of `PATCH /recipes/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeUpdate {
    pub name: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: Option<String>,
}

impl From<RecipeFields> for RecipeUpdate {
    fn from(fields: RecipeFields) -> Self {
        let RecipeFields {
            name,
            category,
            ingredients,
            instructions,
            image,
        } = fields;
        Self {
            name,
            category,
            ingredients,
            instructions,
            image,
        }
    }
}

/// Body of `PATCH /recipes/{id}/rating`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingUpdate {
    pub rating: i64,
}
