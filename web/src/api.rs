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
use std::fmt;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use tracing::{debug, error, instrument};
use wasm_bindgen::JsValue;

use client_api::*;
use recipe_store::RecipeStore;
use recipes::{Recipe, RecipeId};

/// Base url for the recipe backend. Set `RECIPE_API_ROOT` at build time to
/// point somewhere else.
pub const API_ROOT: &'static str = match option_env!("RECIPE_API_ROOT") {
    Some(root) => root,
    None => "http://127.0.0.1:8000/api",
};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(String);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Error {}

impl From<Error> for String {
    fn from(item: Error) -> Self {
        item.0
    }
}

impl From<JsValue> for Error {
    fn from(item: JsValue) -> Self {
        Error(format!("{:?}", item))
    }
}

impl From<String> for Error {
    fn from(item: String) -> Self {
        Error(item)
    }
}

impl From<&'static str> for Error {
    fn from(item: &'static str) -> Self {
        Error(item.to_owned())
    }
}

impl From<serde_json::Error> for Error {
    fn from(item: serde_json::Error) -> Self {
        Error(format!("{}", item))
    }
}

impl From<gloo_net::Error> for Error {
    fn from(item: gloo_net::Error) -> Self {
        Error(format!("{}", item))
    }
}

/// Thin JSON client for the recipe backend. Every call is a single attempt
/// with no timeout.
#[derive(Clone, Debug)]
pub struct HttpStore {
    root: String,
}

impl HttpStore {
    pub fn new(root: String) -> Self {
        Self { root }
    }

    fn url(&self, path: &str) -> String {
        let mut url = self.root.clone();
        url.push_str(path);
        url
    }

    /// Turn any non 2xx response into an error carrying the response body.
    async fn check(resp: Response) -> Result<Response, Error> {
        if resp.ok() {
            debug!(status = resp.status(), "We got a valid response back!");
            Ok(resp)
        } else {
            let status = resp.status();
            let body = resp.text().await?;
            error!(status, %body, "Request failed");
            Err(Error(body))
        }
    }

    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let resp = Request::get(&self.url(path)).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    #[instrument(skip(self, body))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let serialized = to_string(body)?;
        let resp = Request::post(&self.url(path))
            .header("content-type", "application/json")
            .body(serialized)?
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    #[instrument(skip(self, body))]
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let serialized = to_string(body)?;
        let resp = Request::patch(&self.url(path))
            .header("content-type", "application/json")
            .body(serialized)?
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    /// Success is judged by status alone. The body is never read.
    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let resp = Request::delete(&self.url(path)).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl RecipeStore<Error> for HttpStore {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error> {
        self.get(RECIPES_PATH).await
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, Error> {
        self.post(RECIPES_PATH, recipe).await
    }

    async fn update_recipe(&self, id: RecipeId, update: &RecipeUpdate) -> Result<Recipe, Error> {
        self.patch(&recipe_path(id), update).await
    }

    async fn set_rating(&self, id: RecipeId, rating: &RatingUpdate) -> Result<(), Error> {
        let _ack: serde_json::Value = self.patch(&rating_path(id), rating).await?;
        Ok(())
    }

    async fn delete_recipe(&self, id: RecipeId) -> Result<(), Error> {
        self.delete(&recipe_path(id)).await
    }
}
