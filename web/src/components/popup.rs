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
use tracing::instrument;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::app_state::{Message, StateHandler};

pub const POPUP_ID: &'static str = "popup";
const STARS: [i64; 5] = [1, 2, 3, 4, 5];

fn is_overlay_click(ev: &Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map_or(false, |el| el.id() == POPUP_ID)
}

#[derive(Prop)]
pub struct RecipePopupProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

/// The detail popup. There is exactly one of these on the page and it shows
/// whichever recipe the catalog has open.
#[instrument(skip_all)]
#[component]
pub fn RecipePopup<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipePopupProps<'ctx>) -> View<G> {
    let RecipePopupProps { sh } = props;
    let recipe = sh.get_selector(cx, |state| state.get().catalog.open_recipe().cloned());
    let stars = sh.get_selector(cx, |state| state.get().catalog.stars());

    let popup_class = create_memo(cx, move || {
        if recipe.get().is_some() {
            "popup"
        } else {
            "popup hidden"
        }
    });
    let field = move |f: fn(&Recipe) -> String| {
        create_memo(cx, move || recipe.get().as_ref().as_ref().map(f).unwrap_or_default())
    };
    let title = field(|r| r.name.clone());
    let category = field(|r| format!("Category: {}", r.category));
    let image = field(|r| r.image_src().to_owned());
    let ingredients = create_memo(cx, move || {
        recipe
            .get()
            .as_ref()
            .as_ref()
            .map(|r| r.ingredients.clone())
            .unwrap_or_default()
    });
    let steps = create_memo(cx, move || {
        recipe
            .get()
            .as_ref()
            .as_ref()
            .map(|r| r.instruction_steps())
            .unwrap_or_default()
    });
    let star_values = create_signal(cx, STARS.to_vec());

    view! {cx,
        div(id=POPUP_ID, class=popup_class.get(), on:click=move |ev: Event| {
            if is_overlay_click(&ev) {
                sh.dispatch(cx, Message::ClosePopup);
            }
        }) {
            div(class="popup-content") {
                span(id="close-popup", aria-label="Close", on:click=move |_| {
                    sh.dispatch(cx, Message::ClosePopup);
                }) { "×" }
                img(id="popup-img", class="popup-img", alt="", src=image.get())
                h2(id="popup-title") { (title.get()) }
                p(id="popup-category") { (category.get()) }
                h3 { "Ingredients" }
                ul(id="popup-ingredients") {
                    Indexed(
                        iterable=ingredients,
                        view=|cx, ingredient| view! {cx, li { (ingredient) } }
                    )
                }
                h3 { "Instructions" }
                ol(id="popup-instructions") {
                    Indexed(
                        iterable=steps,
                        view=|cx, step| view! {cx, li { (step) } }
                    )
                }
                div(class="rating") {
                    h3 { "Rate this recipe:" }
                    div(class="stars") {
                        Indexed(
                            iterable=star_values,
                            view=move |cx, n| {
                                let class = create_memo(cx, move || {
                                    if n - 1 < *stars.get() {
                                        "star active"
                                    } else {
                                        "star"
                                    }
                                });
                                view! {cx,
                                    span(class=class.get(), on:click=move |_| {
                                        sh.dispatch(cx, Message::Rate(n));
                                    }) { "★" }
                                }
                            }
                        )
                    }
                }
            }
        }
    }
}
