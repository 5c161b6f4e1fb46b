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
use recipes::RecipeForm;
use sycamore::prelude::*;
use tracing::{debug, instrument};
use web_sys::Event;

use crate::app_state::{Message, StateHandler, FORM_SECTION_ID};

#[derive(Prop)]
pub struct AddRecipeProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

/// The add/edit form. The inputs are local signals that get overwritten
/// whenever the application state hands the form a new set of values.
#[instrument(skip_all)]
#[component]
pub fn AddRecipe<'ctx, G: Html>(cx: Scope<'ctx>, props: AddRecipeProps<'ctx>) -> View<G> {
    let AddRecipeProps { sh } = props;
    let form_state = sh.get_selector(cx, |state| {
        let state = state.get();
        (state.form_generation, state.form.clone())
    });
    let submit_label = sh.get_selector(cx, |state| state.get().catalog.submit_label());
    let editing = sh.get_selector(cx, |state| state.get().catalog.editing_id().is_some());

    let name = create_signal(cx, String::new());
    let category = create_signal(cx, String::new());
    let ingredients = create_signal(cx, String::new());
    let instructions = create_signal(cx, String::new());
    let image = create_signal(cx, String::new());

    create_effect(cx, move || {
        let (generation, form) = form_state.get().as_ref().clone();
        debug!(generation, "Syncing recipe form");
        name.set(form.name);
        category.set(form.category);
        ingredients.set(form.ingredients);
        instructions.set(form.instructions);
        image.set(form.image);
    });

    view! {cx,
        section(id=FORM_SECTION_ID, class="add-recipe") {
            h2 { (if *editing.get() { "Edit Recipe" } else { "Add a Recipe" }) }
            form(id="recipe-form", on:submit=move |ev: Event| {
                ev.prevent_default();
                let form = RecipeForm {
                    name: name.get_untracked().as_ref().clone(),
                    category: category.get_untracked().as_ref().clone(),
                    ingredients: ingredients.get_untracked().as_ref().clone(),
                    instructions: instructions.get_untracked().as_ref().clone(),
                    image: image.get_untracked().as_ref().clone(),
                };
                sh.dispatch(cx, Message::SubmitForm(form));
            }) {
                label(for="new-name") { "Name" }
                input(id="new-name", type="text", placeholder="Recipe name", bind:value=name)
                label(for="new-category") { "Category" }
                input(id="new-category", type="text", placeholder="e.g. Dessert", bind:value=category)
                label(for="new-ingredients") { "Ingredients (comma separated)" }
                textarea(id="new-ingredients", rows=3, bind:value=ingredients)
                label(for="new-instructions") { "Instructions (one step per line)" }
                textarea(id="new-instructions", rows=6, bind:value=instructions)
                label(for="new-img") { "Image" }
                input(id="new-img", type="text", placeholder="/img/pancakes.jpg", bind:value=image)
                div(class="form-actions") {
                    button(type="submit", class="btn") { (submit_label.get()) }
                    (if *editing.get() {
                        view! {cx,
                            button(type="button", class="btn outline", on:click=move |_| {
                                sh.dispatch(cx, Message::CancelEdit);
                            }) { "Cancel" }
                        }
                    } else {
                        View::empty()
                    })
                }
            }
        }
    }
}
