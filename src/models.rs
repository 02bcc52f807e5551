//! Frontend Models
//!
//! DTOs matching the CookUs REST API. Field names follow the backend's
//! column names.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ========================
// User
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub user_name: String,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub goal: Option<u32>,
    pub cooking_level: Option<String>,
}

impl User {
    /// First character of the name for the avatar bubble
    pub fn initial(&self) -> String {
        self.user_name.chars().next().map(String::from).unwrap_or_else(|| "U".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Accepts `male`/`female`, `남`, or anything starting with `m`; the rest is female
    pub fn normalize(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or("").trim();
        if raw == "남" || raw.to_lowercase().starts_with('m') {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "남",
            Gender::Female => "여",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CookingLevel {
    #[serde(rename = "상")]
    High,
    #[serde(rename = "하")]
    Low,
}

impl CookingLevel {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("상") => CookingLevel::High,
            _ => CookingLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CookingLevel::High => "상",
            CookingLevel::Low => "하",
        }
    }
}

/// Partial profile update; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateMePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// `Some(None)` clears the birth date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_level: Option<CookingLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupPayload {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub cooking_level: CookingLevel,
    pub goal: u32,
}

impl SignupPayload {
    /// Trim text fields, default a blank name to the id and drop a blank birth date
    pub fn normalized(self) -> Self {
        let id = self.id.trim().to_string();
        let user_name = match self.user_name.trim() {
            "" => id.clone(),
            name => name.to_string(),
        };
        let date_of_birth = self
            .date_of_birth
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Self {
            id,
            user_name,
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
            gender: self.gender,
            date_of_birth,
            cooking_level: self.cooking_level,
            goal: self.goal.min(MAX_WEEKLY_GOAL),
        }
    }
}

/// Upper bound the backend accepts for the weekly goal
pub const MAX_WEEKLY_GOAL: u32 = 21;

/// Verification code dispatch result (find-id / find-password)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeSent {
    #[serde(default)]
    pub ok: bool,
    pub dev_code: Option<String>,
    pub expires_in_sec: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoundId {
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OkResponse {
    #[serde(default)]
    pub ok: bool,
}

// ========================
// Fridge
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_u32", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IngredientHit {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    Merge,
    Replace,
}

// ========================
// Recipes
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recipe_nm_ko: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub cooking_time: Option<u32>,
    #[serde(default)]
    pub level_nm: Option<String>,
    #[serde(default, alias = "ingredients_text")]
    pub ingredient_full: Value,
    #[serde(default, alias = "steps_text")]
    pub step_text: Value,
    #[serde(default)]
    pub step_tip: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedRecipe {
    pub selected_id: i64,
    pub recommend_id: i64,
    pub recipe_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recipe_nm_ko: String,
    #[serde(default)]
    pub action: Option<u8>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub cooking_time: Option<u32>,
    #[serde(default)]
    pub level_nm: Option<String>,
    /// Empty when the backend could not normalize the stored date
    #[serde(default, deserialize_with = "null_as_empty")]
    pub selected_date: String,
}

impl SelectedRecipe {
    pub fn is_done(&self) -> bool {
        self.action == Some(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SelectedRecipesResponse {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub recipes: Vec<SelectedRecipe>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SelectedStatus {
    #[serde(default)]
    pub selected: bool,
    pub selected_id: Option<i64>,
}

// ========================
// Stats
// ========================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStat {
    #[serde(default)]
    pub weekly_rate: f64,
    #[serde(default)]
    pub cooked_count: u32,
    #[serde(default)]
    pub avg_difficulty: f64,
    #[serde(default)]
    pub avg_minutes: f64,
}

/// Raw `{label, count}` row as returned by the distribution endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountRow {
    pub label: String,
    #[serde(default)]
    pub count: u32,
}

/// Distribution row with its share of the total (level or category)
#[derive(Debug, Clone, PartialEq)]
pub struct DistRow {
    pub label: String,
    pub count: u32,
    pub ratio: f64,
}

// ========================
// FAQ
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqItem {
    pub faq_id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// `{ "items": [...] }` envelope used by the FAQ endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Items<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Accept integers, floats and numeric strings; anything else is `None`
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
    .filter(|n| n.is_finite() && *n >= 0.0)
    .map(|n| n.round() as u32))
}

/// Treat an explicit `null` like a missing string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_partial_body() {
        let user: User = serde_json::from_value(json!({"user_id": "devuser123", "user_name": "홍길동"})).unwrap();
        assert_eq!(user.user_id, "devuser123");
        assert_eq!(user.email, None);
        assert_eq!(user.goal, None);
        assert_eq!(user.initial(), "홍");
    }

    #[test]
    fn test_lenient_numbers() {
        let user: User = serde_json::from_value(json!({"user_id": "a", "user_name": "b", "goal": "3"})).unwrap();
        assert_eq!(user.goal, Some(3));

        let ing: Ingredient = serde_json::from_value(json!({"name": "양파", "quantity": 2.0})).unwrap();
        assert_eq!(ing.quantity, Some(2));

        let none: Ingredient = serde_json::from_value(json!({"name": "파", "quantity": null})).unwrap();
        assert_eq!(none.quantity, None);
    }

    #[test]
    fn test_gender_normalize() {
        assert_eq!(Gender::normalize(Some("male")), Gender::Male);
        assert_eq!(Gender::normalize(Some("남")), Gender::Male);
        assert_eq!(Gender::normalize(Some("M")), Gender::Male);
        assert_eq!(Gender::normalize(Some("female")), Gender::Female);
        assert_eq!(Gender::normalize(None), Gender::Female);
    }

    #[test]
    fn test_cooking_level_wire_format() {
        assert_eq!(serde_json::to_value(CookingLevel::High).unwrap(), json!("상"));
        assert_eq!(CookingLevel::parse(Some("하")), CookingLevel::Low);
        assert_eq!(CookingLevel::parse(None), CookingLevel::Low);
    }

    #[test]
    fn test_update_me_payload_skips_absent_fields() {
        let payload = UpdateMePayload {
            user_name: Some("홍길동".into()),
            date_of_birth: Some(None),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"user_name": "홍길동", "date_of_birth": null}));
    }

    #[test]
    fn test_signup_normalized() {
        let payload = SignupPayload {
            id: " cook01 ".into(),
            user_name: "  ".into(),
            email: " a@b.kr ".into(),
            password: " pw ".into(),
            gender: Gender::Female,
            date_of_birth: Some(" ".into()),
            cooking_level: CookingLevel::Low,
            goal: 40,
        }
        .normalized();
        assert_eq!(payload.id, "cook01");
        assert_eq!(payload.user_name, "cook01");
        assert_eq!(payload.email, "a@b.kr");
        assert_eq!(payload.password, "pw");
        assert_eq!(payload.date_of_birth, None);
        assert_eq!(payload.goal, MAX_WEEKLY_GOAL);

        let body = serde_json::to_value(&payload).unwrap();
        assert!(body.get("date_of_birth").is_none());
        assert_eq!(body["gender"], json!("female"));
        assert_eq!(body["cooking_level"], json!("하"));
    }

    #[test]
    fn test_recipe_legacy_aliases() {
        let recipe: Recipe = serde_json::from_value(json!({
            "recipe_id": 7,
            "recipe_nm_ko": "김치찌개",
            "cooking_time": 30,
            "ingredients_text": {"김치": "1컵"},
            "steps_text": "끓인다"
        }))
        .unwrap();
        assert_eq!(recipe.ingredient_full, json!({"김치": "1컵"}));
        assert_eq!(recipe.step_text, json!("끓인다"));
        assert_eq!(recipe.step_tip, Value::Null);
    }

    #[test]
    fn test_progress_camel_case() {
        let stat: ProgressStat = serde_json::from_value(json!({
            "weeklyRate": 0.5, "cookedCount": 4, "avgDifficulty": 1.5, "avgMinutes": 25.0
        }))
        .unwrap();
        assert_eq!(stat.cooked_count, 4);
        assert_eq!(stat.weekly_rate, 0.5);
    }

    #[test]
    fn test_selected_rows_with_null_fields() {
        let body = json!({
            "user_id": "devuser123",
            "count": 3,
            "recipes": [
                {"selected_id": 1, "recommend_id": 10, "recipe_id": 100, "recipe_nm_ko": "된장찌개",
                 "action": 1, "selected_date": "2025-03-07"},
                {"selected_id": 2, "recommend_id": 11, "recipe_id": 101, "recipe_nm_ko": null,
                 "action": null, "selected_date": null},
                {"selected_id": 3, "recommend_id": 12, "recipe_id": 102}
            ]
        });
        let parsed: SelectedRecipesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.recipes.len(), 3);
        assert_eq!(parsed.recipes[1].recipe_nm_ko, "");
        assert_eq!(parsed.recipes[1].selected_date, "");
        assert_eq!(parsed.recipes[2].selected_date, "");

        let march = crate::calendar::Month::from_ym(2025, 3).unwrap();
        let buckets = crate::calendar::month_buckets(&parsed.recipes, march);
        assert_eq!(buckets.len(), 1);
        let ids: Vec<i64> = buckets[&7].iter().map(|r| r.selected_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_recipe_null_name() {
        let recipe: Recipe = serde_json::from_value(json!({"recipe_id": 5, "recipe_nm_ko": null})).unwrap();
        assert_eq!(recipe.recipe_nm_ko, "");
    }
}
