//! Fridge Endpoints

use serde::Serialize;

use super::{client, ApiRequest};
use crate::error::ApiResult;
use crate::models::{Ingredient, IngredientHit, SaveMode};

#[derive(Serialize)]
struct SaveFridgeArgs<'a> {
    items: &'a [Ingredient],
    mode: SaveMode,
    #[serde(rename = "purgeMissing")]
    purge_missing: bool,
}

pub async fn list_fridge() -> ApiResult<Vec<Ingredient>> {
    client().fetch(ApiRequest::get("/me/ingredients")).await
}

pub async fn search_ingredients(q: &str) -> ApiResult<Vec<IngredientHit>> {
    client().fetch(ApiRequest::get("/ingredients/search").query("q", q.trim())).await
}

pub async fn save_fridge(items: &[Ingredient], mode: SaveMode, purge_missing: bool) -> ApiResult<()> {
    let request = ApiRequest::post("/me/ingredients").json(&SaveFridgeArgs { items, mode, purge_missing })?;
    client().execute(request).await?;
    log::info!("saved {} fridge item(s)", items.len());
    Ok(())
}
