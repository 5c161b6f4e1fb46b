// Copyright 2022 Jeremy Wall
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
use recipes::{Catalog, Recipe};
use sycamore::prelude::*;

use crate::api::HttpStore;
use crate::app_state::{get_state_handler, AppState, ListView};
use crate::components::{toast, Header, RecipeList};

fn store() -> HttpStore {
    HttpStore::new("http://localhost/api".to_owned())
}

fn sample_state() -> AppState {
    AppState {
        catalog: Catalog::new().with_recipes(vec![
            Recipe::new(1, "Chocolate Cake", "Dessert")
                .with_ingredients(vec!["flour", "cocoa"])
                .with_instructions("Bake")
                .with_rating(5),
            Recipe::new(2, "Soup", "Dinner")
                .with_ingredients(vec!["water"])
                .with_instructions("Boil")
                .with_rating(1),
        ]),
        ..AppState::new()
    }
}

#[test]
fn test_header_links_to_form() {
    let html = sycamore::render_to_string(|cx| {
        let sh = get_state_handler(cx, AppState::new(), store());
        view! {cx, Header(sh=sh) }
    });
    assert!(html.contains("show-form"));
    assert!(html.contains("Add Recipe"));
    assert!(html.contains("theme-toggle"));
}

#[test]
fn test_recipe_list_renders_cards() {
    let html = sycamore::render_to_string(|cx| {
        let sh = get_state_handler(cx, sample_state(), store());
        view! {cx, RecipeList(sh=sh) }
    });
    assert!(html.contains("recipe-1"));
    assert!(html.contains("recipe-2"));
    assert!(html.contains("rate-high"));
    assert!(html.contains("rate-low"));
    assert!(!html.contains("No recipes found."));
}

#[test]
fn test_recipe_list_empty_view() {
    let mut state = sample_state();
    state.view = ListView::Search("pizza".to_owned());
    let html = sycamore::render_to_string(|cx| {
        let sh = get_state_handler(cx, state, store());
        view! {cx, RecipeList(sh=sh) }
    });
    assert!(!html.contains("recipe-1"));
    assert!(html.contains("No recipes found."));
}

#[test]
fn test_visible_recipes_follow_view() {
    let mut state = sample_state();
    let ids = |state: &AppState| -> Vec<i64> {
        state.visible_recipes().iter().map(|r| r.id).collect()
    };
    assert_eq!(ids(&state), vec![1, 2]);
    state.view = ListView::Category("dinner".to_owned());
    assert_eq!(ids(&state), vec![2]);
    state.view = ListView::Search("COCOA".to_owned());
    assert_eq!(ids(&state), vec![1]);
}

#[test]
fn test_toast_display_time() {
    assert_eq!(toast::display_time(None).as_secs(), 3);
    assert_eq!(toast::display_time(Some(toast::error_timeout())).as_secs(), 6);
    assert_eq!(
        toast::display_time(Some(chrono::Duration::seconds(-1))).as_secs(),
        3
    );
}
