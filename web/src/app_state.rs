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
use recipe_store::{CatalogClient, ClientError, SubmitOutcome, Submitted};
use recipes::{theme::THEME_KEY, Catalog, Recipe, RecipeForm, RecipeId, Theme};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, info, instrument, warn};

use crate::api::{Error, HttpStore};
use crate::components::toast;
use crate::js_lib;

pub const FORM_SECTION_ID: &'static str = "add-recipe";

/// Which recipes the card grid shows. The most recent search or filter wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    All,
    Search(String),
    Category(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub catalog: Catalog,
    pub view: ListView,
    pub form: RecipeForm,
    // Bumped every time the form is replaced so the inputs resync even when
    // the new form equals the old one.
    pub form_generation: usize,
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            view: ListView::All,
            form: RecipeForm::default(),
            form_generation: 0,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn visible_recipes(&self) -> Vec<Recipe> {
        let visible: Vec<&Recipe> = match &self.view {
            ListView::All => self.catalog.recipes().iter().collect(),
            ListView::Search(term) => self.catalog.search(term),
            ListView::Category(category) => self.catalog.filter(Some(category.as_str())),
        };
        visible.into_iter().cloned().collect()
    }

    fn set_form(&mut self, form: RecipeForm) {
        self.form = form;
        self.form_generation += 1;
    }
}

#[derive(Debug)]
pub enum Message {
    LoadRecipes,
    Search(String),
    Filter(Option<String>),
    SubmitForm(RecipeForm),
    StartEdit(RecipeId),
    CancelEdit,
    DeleteRecipe(RecipeId),
    OpenRecipe(RecipeId),
    ClosePopup,
    Rate(i64),
    ToggleTheme,
}

pub struct StateMachine(CatalogClient<HttpStore>);

fn report_error<'ctx>(cx: Scope<'ctx>, err: ClientError<Error>) {
    match err {
        ClientError::Validation(e) => js_lib::alert(&e.to_string()),
        ClientError::Store(e) => {
            toast::error_message(
                cx,
                &format!("Request failed: {}", e),
                Some(toast::error_timeout()),
            )
        }
    }
}

/// Fold the result of a finished workflow into whatever the state is now.
/// Only the recipes come from the workflow; session state the user changed
/// in the meantime is kept.
fn merge_recipes<F>(original: &Signal<AppState>, working: &Catalog, settle: F)
where
    F: FnOnce(&mut Catalog),
{
    let mut state = original.get_untracked().as_ref().clone();
    state.catalog.replace(working.recipes().to_vec());
    settle(&mut state.catalog);
    original.set(state);
}

impl MessageMapper<Message, AppState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<AppState>) {
        let mut original_copy = original.get_untracked().as_ref().clone();
        match msg {
            Message::LoadRecipes => {
                let client = self.0.clone();
                let mut working = original_copy.catalog.clone();
                spawn_local_scoped(cx, async move {
                    info!("Synchronizing Recipes");
                    match client.load(&mut working).await {
                        Ok(()) => merge_recipes(original, &working, |_| ()),
                        Err(err) => report_error(cx, err),
                    }
                });
                return;
            }
            Message::Search(term) => {
                original_copy.view = if term.is_empty() {
                    ListView::All
                } else {
                    ListView::Search(term)
                };
            }
            Message::Filter(category) => {
                original_copy.view = match category {
                    Some(cat) if !cat.is_empty() && !cat.eq_ignore_ascii_case("all") => {
                        ListView::Category(cat)
                    }
                    _ => ListView::All,
                };
            }
            Message::SubmitForm(form) => {
                if let Err(err) = form.validate() {
                    warn!(?err, "Refusing to submit incomplete recipe");
                    js_lib::alert(&err.to_string());
                    return;
                }
                let client = self.0.clone();
                let mut working = original_copy.catalog.clone();
                spawn_local_scoped(cx, async move {
                    match client.submit(&mut working, &form).await {
                        Ok(Submitted { outcome, reload }) => {
                            let mut state = original.get_untracked().as_ref().clone();
                            if reload.is_ok() {
                                state.catalog.replace(working.recipes().to_vec());
                            }
                            match outcome {
                                SubmitOutcome::Created(id) => state.catalog.record_created(id),
                                SubmitOutcome::Updated(_) => state.catalog.finish_edit(),
                            }
                            state.set_form(RecipeForm::default());
                            original.set(state);
                            debug!(?outcome, "Saved recipe");
                            js_lib::alert("Saved!");
                            if let Err(err) = reload {
                                report_error(cx, err);
                            }
                        }
                        Err(err) => report_error(cx, err),
                    }
                });
                return;
            }
            Message::StartEdit(id) => match original_copy.catalog.start_edit(id) {
                Some(form) => {
                    original_copy.set_form(form);
                    js_lib::scroll_into_view(FORM_SECTION_ID);
                }
                None => {
                    warn!(id, "Recipe not found");
                    return;
                }
            },
            Message::CancelEdit => {
                original_copy.catalog.finish_edit();
                original_copy.set_form(RecipeForm::default());
            }
            Message::DeleteRecipe(id) => {
                if !js_lib::confirm("Delete this recipe?") {
                    debug!(id, "Delete cancelled");
                    return;
                }
                let client = self.0.clone();
                let mut working = original_copy.catalog.clone();
                spawn_local_scoped(cx, async move {
                    match client.delete(&mut working, id).await {
                        Ok(()) => {
                            merge_recipes(original, &working, |_| ());
                            toast::message(cx, "Recipe deleted.", None);
                        }
                        Err(err) => report_error(cx, err),
                    }
                });
                return;
            }
            Message::OpenRecipe(id) => {
                if original_copy.catalog.open(id).is_none() {
                    warn!(id, "Recipe not found");
                    return;
                }
            }
            Message::ClosePopup => {
                if !original_copy.catalog.is_popup_open() {
                    return;
                }
                original_copy.catalog.close();
            }
            Message::Rate(rating) => {
                if original_copy.catalog.begin_rating(rating).is_none() {
                    debug!("No open recipe to rate");
                    return;
                }
                let sent = match original_copy.catalog.pending_rating() {
                    Some(sent) => sent,
                    None => return,
                };
                let client = self.0.clone();
                let mut working = original_copy.catalog.clone();
                // Show the new stars before the request goes out.
                original.set(original_copy);
                spawn_local_scoped(cx, async move {
                    match client.commit_rating(&mut working).await {
                        Ok(()) => merge_recipes(original, &working, |catalog| {
                            catalog.settle_rating(sent, true)
                        }),
                        Err(err) => {
                            let mut state = original.get_untracked().as_ref().clone();
                            // A failed write has already rolled the working copy
                            // back. Anything else means only the reload failed.
                            let saved = working.stars() == sent.rating;
                            state.catalog.settle_rating(sent, saved);
                            original.set(state);
                            report_error(cx, err);
                        }
                    }
                });
                return;
            }
            Message::ToggleTheme => {
                original_copy.theme = original_copy.theme.toggled();
                js_lib::set_storage_item(THEME_KEY, original_copy.theme.as_str());
            }
        }
        original.set(original_copy);
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, AppState, Message>;

pub fn get_state_handler<'ctx>(
    cx: Scope<'ctx>,
    initial: AppState,
    store: HttpStore,
) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine(CatalogClient::new(store)))
}
