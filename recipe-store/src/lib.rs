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
use std::fmt;

use async_trait::async_trait;
use tracing::{debug, error, instrument, warn};

use client_api::{NewRecipe, RatingUpdate, RecipeUpdate};
use recipes::{Catalog, FormError, Recipe, RecipeForm, RecipeId};

#[async_trait(?Send)]
/// Define the shared interface to use for interacting with a store of recipes.
pub trait RecipeStore<E>
where
    E: Send,
{
    // NOTE(jwall): The browser futures are not Send so neither is this trait.

    /// Get every recipe in backend order.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, E>;
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, E>;
    async fn update_recipe(&self, id: RecipeId, update: &RecipeUpdate) -> Result<Recipe, E>;
    /// Set just the rating. The response body is not interpreted.
    async fn set_rating(&self, id: RecipeId, rating: &RatingUpdate) -> Result<(), E>;
    async fn delete_recipe(&self, id: RecipeId) -> Result<(), E>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError<E> {
    Validation(FormError),
    Store(E),
}

impl<E: fmt::Display> fmt::Display for ClientError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation(e) => write!(f, "{}", e),
            ClientError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for ClientError<E> {}

impl<E> From<FormError> for ClientError<E> {
    fn from(e: FormError) -> Self {
        ClientError::Validation(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(RecipeId),
    Updated(RecipeId),
}

/// A submit whose write reached the store. The reload that follows can
/// still fail independently of the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted<E> {
    pub outcome: SubmitOutcome,
    pub reload: Result<(), ClientError<E>>,
}

/// Runs the workflows that change backend state. Each one finishes by
/// reloading the whole catalog from the store.
#[derive(Debug, Clone)]
pub struct CatalogClient<S> {
    store: S,
}

impl<S> CatalogClient<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> CatalogClient<S> {
    #[instrument(skip_all)]
    pub async fn load<E>(&self, catalog: &mut Catalog) -> Result<(), ClientError<E>>
    where
        S: RecipeStore<E>,
        E: Send + fmt::Debug,
    {
        let recipes = self.store.list_recipes().await.map_err(|err| {
            error!(?err, "Failed to load recipes");
            ClientError::Store(err)
        })?;
        debug!(count = recipes.len(), "Loaded recipes");
        catalog.replace(recipes);
        Ok(())
    }

    /// Validate the form and write it to the store. Once the write succeeds
    /// the catalog is settled (edit mode closed or the id counter advanced)
    /// before the reload, so a failed reload never leads to a second write
    /// with the same id.
    #[instrument(skip_all, fields(editing=?catalog.editing_id()))]
    pub async fn submit<E>(
        &self,
        catalog: &mut Catalog,
        form: &RecipeForm,
    ) -> Result<Submitted<E>, ClientError<E>>
    where
        S: RecipeStore<E>,
        E: Send + fmt::Debug,
    {
        let fields = form.validate().map_err(|err| {
            warn!(?err, "Recipe form is incomplete");
            err
        })?;
        let outcome = match catalog.editing_id() {
            Some(id) => {
                debug!(id, "Updating recipe");
                self.store
                    .update_recipe(id, &RecipeUpdate::from(fields))
                    .await
                    .map_err(|err| {
                        error!(?err, id, "Failed to update recipe");
                        ClientError::Store(err)
                    })?;
                catalog.finish_edit();
                SubmitOutcome::Updated(id)
            }
            None => {
                let id = catalog.next_id();
                debug!(id, "Creating recipe");
                self.store
                    .create_recipe(&NewRecipe::new(id, fields))
                    .await
                    .map_err(|err| {
                        error!(?err, id, "Failed to create recipe");
                        ClientError::Store(err)
                    })?;
                catalog.record_created(id);
                SubmitOutcome::Created(id)
            }
        };
        let reload = self.load::<E>(catalog).await;
        if reload.is_err() {
            warn!(?outcome, "Recipe was saved but the reload failed");
        }
        Ok(Submitted { outcome, reload })
    }

    #[instrument(skip(self, catalog))]
    pub async fn delete<E>(&self, catalog: &mut Catalog, id: RecipeId) -> Result<(), ClientError<E>>
    where
        S: RecipeStore<E>,
        E: Send + fmt::Debug,
    {
        self.store.delete_recipe(id).await.map_err(|err| {
            error!(?err, id, "Failed to delete recipe");
            ClientError::Store(err)
        })?;
        self.load::<E>(catalog).await
    }

    /// Send the pending rating shown in the popup to the store. A failed
    /// write puts the previous star count back.
    #[instrument(skip_all, fields(pending=?catalog.pending_rating()))]
    pub async fn commit_rating<E>(&self, catalog: &mut Catalog) -> Result<(), ClientError<E>>
    where
        S: RecipeStore<E>,
        E: Send + fmt::Debug,
    {
        let pending = match catalog.pending_rating() {
            Some(pending) => pending,
            None => {
                debug!("No pending rating");
                return Ok(());
            }
        };
        let update = RatingUpdate {
            rating: pending.rating,
        };
        if let Err(err) = self.store.set_rating(pending.recipe_id, &update).await {
            error!(?err, id = pending.recipe_id, "Failed to save rating");
            catalog.rollback_rating();
            return Err(ClientError::Store(err));
        }
        catalog.confirm_rating();
        self.load::<E>(catalog).await
    }

    /// Rate the recipe open in the popup. Returns the rated recipe id or
    /// `None` when no popup is open.
    #[instrument(skip(self, catalog))]
    pub async fn rate<E>(
        &self,
        catalog: &mut Catalog,
        rating: i64,
    ) -> Result<Option<RecipeId>, ClientError<E>>
    where
        S: RecipeStore<E>,
        E: Send + fmt::Debug,
    {
        let id = match catalog.begin_rating(rating) {
            Some(id) => id,
            None => {
                debug!("No open recipe to rate");
                return Ok(None);
            }
        };
        self.commit_rating::<E>(catalog).await?;
        Ok(Some(id))
    }
}
