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
use recipes::Recipe;
use sycamore::prelude::*;
use tracing::{debug, instrument};
use web_sys::Event;

use crate::app_state::{Message, StateHandler};

#[derive(Prop)]
pub struct RecipeCardProps<'ctx> {
    pub sh: StateHandler<'ctx>,
    pub recipe: Recipe,
}

/// A single card in the recipe grid. Clicking the card opens the detail
/// popup. The action buttons keep their clicks to themselves.
#[instrument(skip_all, fields(id=props.recipe.id))]
#[component]
pub fn RecipeCard<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeCardProps<'ctx>) -> View<G> {
    let RecipeCardProps { sh, recipe } = props;
    let id = recipe.id;
    debug!("Rendering recipe card");
    let card_id = format!("recipe-{}", id);
    let data_id = id.to_string();
    let image = recipe.image_src().to_owned();
    let alt = recipe.name.clone();
    let name = recipe.name.clone();
    let category = recipe.category.clone();
    let ingredients = recipe.ingredients_text();
    let badge_class = format!("rating-badge {}", recipe.rating_tier().css_class());
    let badge = format!("⭐ {}", recipe.rating);

    view! {cx,
        div(class="recipe-card", id=card_id, data-id=data_id, on:click=move |_| {
            sh.dispatch(cx, Message::OpenRecipe(id));
        }) {
            img(src=image, alt=alt)
            h3(class="title") { (name) }
            p(class="category") { strong { "Category:" } " " (category) }
            p(class="ingredients") { strong { "Ingredients:" } " " (ingredients) }
            div(class="rating-row") {
                span(class=badge_class) { (badge) }
                div(class="card-actions") {
                    button(type="button", class="btn small edit", on:click=move |ev: Event| {
                        ev.stop_propagation();
                        sh.dispatch(cx, Message::StartEdit(id));
                    }) { "Edit" }
                    button(type="button", class="btn small danger", on:click=move |ev: Event| {
                        ev.stop_propagation();
                        sh.dispatch(cx, Message::DeleteRecipe(id));
                    }) { "Delete" }
                }
            }
        }
    }
}
