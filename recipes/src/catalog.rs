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
use crate::{Recipe, RecipeForm, RecipeId};

/// A rating write that has been shown to the user but not yet acknowledged
/// by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRating {
    pub recipe_id: RecipeId,
    pub rating: i64,
    pub previous: i64,
}

/// The client side cache of recipes along with the session state for the
/// edit form and the detail popup.
///
/// The recipe list is only ever replaced wholesale from a backend load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    next_id: RecipeId,
    editing_id: Option<RecipeId>,
    open_recipe_id: Option<RecipeId>,
    stars: i64,
    pending_rating: Option<PendingRating>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
            next_id: 1,
            editing_id: None,
            open_recipe_id: None,
            stars: 0,
            pending_rating: None,
        }
    }

    pub fn with_recipes<Iter>(mut self, recipes: Iter) -> Self
    where
        Iter: IntoIterator<Item = Recipe>,
    {
        self.replace(recipes.into_iter().collect());
        self
    }

    /// Replace the cached recipes with a fresh load from the backend.
    pub fn replace(&mut self, recipes: Vec<Recipe>) {
        self.next_id = recipes.iter().map(|r| r.id).max().map_or(1, |id| id + 1);
        self.recipes = recipes;
        if let Some(open_id) = self.open_recipe_id {
            match self.get(open_id).map(|r| r.rating) {
                Some(rating) => {
                    self.stars = rating;
                    self.pending_rating = None;
                }
                None => self.close(),
            }
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// The identifier a newly created recipe will be given. Only valid right
    /// after a load.
    pub fn next_id(&self) -> RecipeId {
        self.next_id
    }

    /// Move the id counter past a recipe the backend just accepted so the
    /// next create never reuses it, even before a reload.
    pub fn record_created(&mut self, id: RecipeId) {
        self.next_id = self.next_id.max(id + 1);
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for r in self.recipes.iter() {
            if !categories.iter().any(|c| r.in_category(c)) {
                categories.push(r.category.clone());
            }
        }
        categories
    }

    pub fn search(&self, term: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.matches_term(term)).collect()
    }

    /// Recipes in the given category. `None` or `"all"` selects everything.
    pub fn filter(&self, category: Option<&str>) -> Vec<&Recipe> {
        match category {
            None => self.recipes.iter().collect(),
            Some(cat) if cat.is_empty() || cat.eq_ignore_ascii_case("all") => {
                self.recipes.iter().collect()
            }
            Some(cat) => self.recipes.iter().filter(|r| r.in_category(cat)).collect(),
        }
    }

    /// Put the recipe into edit mode and hand back a form populated from it.
    /// Unknown ids leave everything untouched.
    pub fn start_edit(&mut self, id: RecipeId) -> Option<RecipeForm> {
        let form = RecipeForm::from_recipe(self.get(id)?);
        self.editing_id = Some(id);
        Some(form)
    }

    pub fn finish_edit(&mut self) {
        self.editing_id = None;
    }

    pub fn editing_id(&self) -> Option<RecipeId> {
        self.editing_id
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Save Changes"
        } else {
            "Add Recipe"
        }
    }

    pub fn open(&mut self, id: RecipeId) -> Option<&Recipe> {
        let rating = self.get(id)?.rating;
        self.open_recipe_id = Some(id);
        self.stars = rating;
        self.pending_rating = None;
        self.get(id)
    }

    pub fn close(&mut self) {
        self.open_recipe_id = None;
        self.stars = 0;
        self.pending_rating = None;
    }

    pub fn open_recipe_id(&self) -> Option<RecipeId> {
        self.open_recipe_id
    }

    pub fn open_recipe(&self) -> Option<&Recipe> {
        self.open_recipe_id.and_then(|id| self.get(id))
    }

    pub fn is_popup_open(&self) -> bool {
        self.open_recipe_id.is_some()
    }

    pub fn stars(&self) -> i64 {
        self.stars
    }

    pub fn star_active(&self, idx: i64) -> bool {
        idx < self.stars
    }

    /// Show the new rating right away and remember what to roll back to.
    pub fn begin_rating(&mut self, rating: i64) -> Option<RecipeId> {
        let recipe_id = self.open_recipe_id?;
        self.pending_rating = Some(PendingRating {
            recipe_id,
            rating,
            previous: self.stars,
        });
        self.stars = rating;
        Some(recipe_id)
    }

    pub fn pending_rating(&self) -> Option<PendingRating> {
        self.pending_rating
    }

    pub fn confirm_rating(&mut self) {
        self.pending_rating = None;
    }

    /// Settle the outcome of the rating write `sent`. When a newer rating has
    /// replaced it in the meantime only the newer one's fallback is fixed up,
    /// so a later rollback lands on the last stored value.
    pub fn settle_rating(&mut self, sent: PendingRating, saved: bool) {
        // `previous` can be rewritten below, so writes are matched on recipe
        // and rating alone.
        let is_sent = |p: &PendingRating| p.recipe_id == sent.recipe_id && p.rating == sent.rating;
        if self.pending_rating.as_ref().map_or(false, is_sent) {
            if saved {
                self.confirm_rating();
            } else {
                self.rollback_rating();
            }
            return;
        }
        if saved {
            return;
        }
        if let Some(newer) = self.pending_rating.as_mut() {
            if newer.recipe_id == sent.recipe_id && newer.previous == sent.rating {
                newer.previous = sent.previous;
            }
        }
    }

    pub fn rollback_rating(&mut self) {
        if let Some(pending) = self.pending_rating.take() {
            if self.open_recipe_id == Some(pending.recipe_id) {
                self.stars = pending.previous;
            }
        }
    }
}
