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
use crate::{
    app_state::StateHandler,
    components::RecipeCard,
};

use sycamore::prelude::*;
use tracing::{debug, instrument};

#[derive(Prop)]
pub struct RecipeListProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

#[instrument(skip_all)]
#[component]
pub fn RecipeList<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeListProps<'ctx>) -> View<G> {
    let RecipeListProps { sh } = props;
    let recipes = sh.get_selector(cx, |state| state.get().visible_recipes());
    let empty = create_memo(cx, move || recipes.get().is_empty());
    view! {cx,
        div(id="recipe-list", class="recipe-grid") {
            Indexed(
                iterable=recipes,
                view=move |cx, recipe| {
                    debug!(id=recipe.id, "Rendering recipe");
                    view! {cx,
                        RecipeCard(sh=sh, recipe=recipe)
                    }
                }
            )
        }
        (if *empty.get() {
            view! {cx, p(class="empty") { "No recipes found." } }
        } else {
            View::empty()
        })
    }
}
