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

use crate::app_state::{Message, StateHandler, FORM_SECTION_ID};
use crate::js_lib;

#[derive(Prop)]
pub struct HeaderProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

#[component]
pub fn Header<'ctx, G: Html>(cx: Scope<'ctx>, props: HeaderProps<'ctx>) -> View<G> {
    let HeaderProps { sh } = props;
    let toggle_label = sh.get_selector(cx, |state| state.get().theme.toggle_label());
    view! {cx,
        nav(class="site-header") {
            h1(class="title") { "Recipe House" }
            button(id="show-form", type="button", class="btn", on:click=|_| {
                js_lib::scroll_into_view(FORM_SECTION_ID);
            }) { "Add Recipe" }
            button(id="theme-toggle", type="button", class="btn outline", on:click=move |_| {
                sh.dispatch(cx, Message::ToggleTheme);
            }) { (toggle_label.get()) }
        }
    }
}
