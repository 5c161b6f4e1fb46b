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
use tracing::{error, warn};
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{
    window, Document, Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    Storage, Window,
};

fn get_window() -> Window {
    window().expect("No window present")
}

pub fn get_document() -> Document {
    get_window().document().expect("No document in window")
}

pub fn get_element_by_id<E>(id: &str) -> Result<Option<E>, Element>
where
    E: JsCast,
{
    match get_document().get_element_by_id(id) {
        Some(e) => e.dyn_into::<E>().map(|e| Some(e)),
        None => Ok(None),
    }
}

pub fn get_storage() -> Option<Storage> {
    match get_window().local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            error!(?err, "Failed to get storage");
            None
        }
    }
}

pub fn get_storage_item(key: &str) -> Option<String> {
    get_storage()?.get_item(key).unwrap_or_else(|err| {
        error!(?err, key, "Couldn't read from storage");
        None
    })
}

pub fn set_storage_item(key: &str, value: &str) {
    match get_storage() {
        Some(storage) => {
            if let Err(err) = storage.set_item(key, value) {
                error!(?err, key, "Couldn't write to storage");
            }
        }
        None => warn!(key, "No storage available"),
    }
}

/// Blocking message dialog.
pub fn alert(msg: &str) {
    if let Err(err) = get_window().alert_with_message(msg) {
        error!(?err, "Failed to show alert");
    }
}

/// Blocking yes/no dialog. Anything but an explicit yes is a no.
pub fn confirm(msg: &str) -> bool {
    get_window().confirm_with_message(msg).unwrap_or_else(|err| {
        error!(?err, "Failed to show confirmation");
        false
    })
}

pub fn scroll_into_view(id: &str) {
    match get_element_by_id::<Element>(id) {
        Ok(Some(el)) => {
            let mut opts = ScrollIntoViewOptions::new();
            opts.behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        Ok(None) | Err(_) => warn!(id, "No element to scroll to"),
    }
}

pub fn toggle_body_class(class: &str, force: bool) {
    let body: Option<HtmlElement> = get_document().body();
    match body {
        Some(body) => {
            if let Err(err) = body.class_list().toggle_with_force(class, force) {
                error!(?err, class, "Failed to toggle body class");
            }
        }
        None => warn!(class, "No body to toggle class on"),
    }
}

/// Call `f` whenever `key` is pressed anywhere on the page. The listener
/// lives as long as the page does.
pub fn on_window_key<F>(key: &'static str, mut f: F)
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
        if ev.key() == key {
            f();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    if let Err(err) =
        get_window().add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
    {
        error!(?err, key, "Failed to register key handler");
    }
    closure.forget();
}
