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
use sycamore::{easing, motion, prelude::*};
use tracing::{debug, error};
use web_sys::{Element, HtmlElement};

use crate::js_lib;

const SECTION_ID: &'static str = "toast-container";
const DEFAULT_TIMEOUT_SECS: i64 = 3;
const ERROR_TIMEOUT_SECS: i64 = 6;

/// Errors stay up long enough to read the response body they carry.
pub fn error_timeout() -> chrono::Duration {
    chrono::Duration::seconds(ERROR_TIMEOUT_SECS)
}

/// How long a toast stays up. Missing or negative timeouts use the default.
pub fn display_time(timeout: Option<chrono::Duration>) -> std::time::Duration {
    timeout
        .and_then(|t| t.to_std().ok())
        .unwrap_or_else(|| std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS as u64))
}

#[component]
pub fn ToastContainer<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        section(id=SECTION_ID, class="toast-container") { }
    }
}

fn get_container() -> Option<HtmlElement> {
    match js_lib::get_element_by_id::<HtmlElement>(SECTION_ID) {
        Ok(container) => container,
        Err(err) => {
            error!(?err, "toast-container is not an html element");
            None
        }
    }
}

fn create_output_element(msg: &str, class: &str) -> Option<Element> {
    let document = js_lib::get_document();
    let output = document.create_element("output").ok()?;
    output.set_attribute("class", class).ok()?;
    output.set_attribute("role", "status").ok()?;
    output.append_child(&document.create_text_node(msg)).ok()?;
    Some(output)
}

fn show_toast<'ctx>(cx: Scope<'ctx>, msg: &str, class: &str, timeout: Option<chrono::Duration>) {
    let timeout = display_time(timeout);
    let (container, output) = match (get_container(), create_output_element(msg, class)) {
        (Some(container), Some(output)) => (container, output),
        _ => {
            error!(msg, "Unable to show toast");
            return;
        }
    };
    let tweened = motion::create_tweened_signal(cx, 0.0 as f32, timeout, easing::quad_in);
    tweened.set(1.0);
    create_effect_scoped(cx, move |_cx| {
        if !tweened.is_tweening() {
            debug!("Toast timed out");
            if let Some(container) = get_container() {
                // Toasts expire in the order they were shown.
                if let Some(first) = container.first_element_child() {
                    let _ = container.remove_child(&first);
                }
            }
        }
    });
    if let Err(err) = container.append_child(&output) {
        error!(?err, "Failed to append toast");
    }
}

pub fn message<'ctx>(cx: Scope<'ctx>, msg: &str, timeout: Option<chrono::Duration>) {
    show_toast(cx, msg, "toast", timeout);
}

pub fn error_message<'ctx>(cx: Scope<'ctx>, msg: &str, timeout: Option<chrono::Duration>) {
    show_toast(cx, msg, "toast error", timeout);
}
