//! Recipe Endpoints
//!
//! Recommendations, recipe details and the selected-recipe log.

use serde::Serialize;
use serde_json::Value;

use super::{client, ApiRequest};
use crate::error::ApiResult;
use crate::models::{Recipe, SelectedRecipesResponse, SelectedStatus};

#[derive(Serialize)]
struct SelectArgs {
    recipe_id: i64,
}

#[derive(Serialize)]
struct ActionArgs {
    action: u8,
}

pub async fn recommend_top3() -> ApiResult<Vec<Recipe>> {
    let body: Value = client().fetch(ApiRequest::get("/me/recommendations")).await?;
    Ok(parse_recommendations(body))
}

pub async fn select_recipe(recipe_id: i64) -> ApiResult<()> {
    let request = ApiRequest::post("/me/selected-recipe").json(&SelectArgs { recipe_id })?;
    client().execute(request).await?;
    Ok(())
}

pub async fn get_selected() -> ApiResult<SelectedRecipesResponse> {
    client().fetch(ApiRequest::get("/recipes/selected")).await
}

pub async fn get_recipe(id: i64) -> ApiResult<Recipe> {
    let body: Value = client().fetch(ApiRequest::get(format!("/recipes/{}", id))).await?;
    Ok(serde_json::from_value(unwrap_envelope(body, "recipe"))?)
}

pub async fn get_recommendation(recommend_id: i64) -> ApiResult<Recipe> {
    let body: Value = client().fetch(ApiRequest::get(format!("/recommendations/{}", recommend_id))).await?;
    Ok(serde_json::from_value(unwrap_envelope(body, "recommendation"))?)
}

pub async fn delete_selected(selected_id: i64) -> ApiResult<()> {
    client().execute(ApiRequest::delete(format!("/me/selected-recipe/{}", selected_id))).await?;
    Ok(())
}

/// Mark a selected recipe as cooked (`done = true`) or not
pub async fn set_selected_action(selected_id: i64, done: bool) -> ApiResult<()> {
    let request = ApiRequest::patch(format!("/me/selected-recipe/{}/action", selected_id))
        .json(&ActionArgs { action: u8::from(done) })?;
    client().execute(request).await?;
    Ok(())
}

pub async fn selected_status(recipe_id: i64) -> ApiResult<SelectedStatus> {
    client()
        .fetch(ApiRequest::get("/me/selected-recipe/status").query("recipe_id", recipe_id))
        .await
}

/// `{ "<key>": {...} }` or the object itself
fn unwrap_envelope(body: Value, key: &str) -> Value {
    match body {
        Value::Object(mut map) if map.get(key).is_some_and(Value::is_object) => map.remove(key).unwrap_or(Value::Null),
        other => other,
    }
}

/// Accept a bare array, `recommended_db_candidates` or `recommended`, and
/// keep only rows with a usable numeric `recipe_id`
pub fn parse_recommendations(body: Value) -> Vec<Recipe> {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("recommended_db_candidates").or_else(|| map.remove("recommended")) {
            Some(Value::Array(rows)) => rows,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    rows.into_iter()
        .filter(|row| row.get("recipe_id").and_then(Value::as_f64).is_some_and(f64::is_finite))
        .filter_map(|row| match serde_json::from_value::<Recipe>(row) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                log::warn!("skipping malformed recommendation: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_array() {
        let recipes = parse_recommendations(json!([
            {"recipe_id": 1, "recipe_nm_ko": "된장찌개"},
            {"recipe_id": null, "recipe_nm_ko": "깨진 행"},
            {"recipe_nm_ko": "아이디 없음"},
            {"recipe_id": 3, "recipe_nm_ko": "계란말이"}
        ]));
        let ids: Vec<i64> = recipes.iter().map(|r| r.recipe_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_parse_envelopes() {
        let candidates = parse_recommendations(json!({
            "recommended_db_candidates": [{"recipe_id": 5, "recipe_nm_ko": "잡채"}],
            "recommended": [{"recipe_id": 9, "recipe_nm_ko": "무시됨"}]
        }));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].recipe_id, 5);

        let fallback = parse_recommendations(json!({"recommended": [{"recipe_id": 9, "recipe_nm_ko": "비빔밥"}]}));
        assert_eq!(fallback[0].recipe_nm_ko, "비빔밥");

        assert!(parse_recommendations(json!({"message": "no data"})).is_empty());
    }

    #[test]
    fn test_unwrap_envelope() {
        let wrapped = unwrap_envelope(json!({"recommendation": {"recipe_id": 4}}), "recommendation");
        assert_eq!(wrapped, json!({"recipe_id": 4}));

        let bare = unwrap_envelope(json!({"recipe_id": 4, "recipe_nm_ko": "국"}), "recipe");
        assert_eq!(bare["recipe_nm_ko"], json!("국"));
    }

    #[test]
    fn test_action_body() {
        assert_eq!(serde_json::to_value(ActionArgs { action: u8::from(true) }).unwrap(), json!({"action": 1}));
    }
}
