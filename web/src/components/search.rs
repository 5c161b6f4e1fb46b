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
use sycamore::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::app_state::{ListView, Message, StateHandler};

fn input_value(ev: &Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

#[derive(Prop)]
pub struct SearchBarProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

/// Free text search plus one filter button per known category.
#[component]
pub fn SearchBar<'ctx, G: Html>(cx: Scope<'ctx>, props: SearchBarProps<'ctx>) -> View<G> {
    let SearchBarProps { sh } = props;
    let categories = sh.get_selector(cx, |state| state.get().catalog.categories());
    let selected = sh.get_selector(cx, |state| match &state.get().view {
        ListView::Category(category) => Some(category.to_lowercase()),
        _ => None,
    });
    let all_class = create_memo(cx, move || {
        if selected.get().is_none() {
            "btn small selected"
        } else {
            "btn small"
        }
    });

    view! {cx,
        div(class="toolbar") {
            input(id="search", type="search", placeholder="Search by name, ingredient or category", on:input=move |ev: Event| {
                let term = input_value(&ev);
                debug!(%term, "searching recipes");
                sh.dispatch(cx, Message::Search(term));
            })
            div(id="category-filter", class="filters") {
                button(type="button", class=all_class.get(), on:click=move |_| {
                    sh.dispatch(cx, Message::Filter(None));
                }) { "All" }
                Indexed(
                    iterable=categories,
                    view=move |cx, category| {
                        let key = category.to_lowercase();
                        let class = create_memo(cx, move || {
                            if selected.get().as_ref().as_ref() == Some(&key) {
                                "btn small selected"
                            } else {
                                "btn small"
                            }
                        });
                        let label = category.clone();
                        view! {cx,
                            button(type="button", class=class.get(), on:click=move |_| {
                                sh.dispatch(cx, Message::Filter(Some(category.clone())));
                            }) { (label) }
                        }
                    }
                )
            }
        }
    }
}
