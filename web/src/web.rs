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
use recipes::{theme::THEME_KEY, Theme};
use sycamore::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    api::{HttpStore, API_ROOT},
    app_state::{get_state_handler, AppState, Message},
    components::*,
    js_lib,
};

#[instrument]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    let theme = Theme::from_stored(js_lib::get_storage_item(THEME_KEY).as_deref());
    info!(theme = theme.as_str(), "Starting UI");
    let sh = get_state_handler(
        cx,
        AppState::new().with_theme(theme),
        HttpStore::new(API_ROOT.to_owned()),
    );

    let dark = sh.get_selector(cx, |state| state.get().theme.is_dark());
    create_effect(cx, move || js_lib::toggle_body_class("dark", *dark.get()));
    let popup_open = sh.get_selector(cx, |state| state.get().catalog.is_popup_open());
    create_effect(cx, move || js_lib::toggle_body_class("modal-open", *popup_open.get()));

    // The key listener outlives any scope so it only pokes a signal. The
    // effect turns that into a message.
    let escape = create_rc_signal(());
    js_lib::on_window_key("Escape", {
        let escape = escape.clone();
        move || escape.trigger_subscribers()
    });
    create_effect(cx, move || {
        escape.track();
        debug!("Escape pressed");
        // Closing an already closed popup is a no-op.
        sh.dispatch(cx, Message::ClosePopup);
    });

    sh.dispatch(cx, Message::LoadRecipes);

    view! {cx,
        div(class="app") {
            Header(sh=sh)
            main(class="container") {
                SearchBar(sh=sh)
                RecipeList(sh=sh)
                AddRecipe(sh=sh)
            }
            RecipePopup(sh=sh)
            ToastContainer()
        }
    }
}
