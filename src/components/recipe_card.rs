//! Recipe Card Component

use leptos::prelude::*;

use crate::models::Recipe;
use crate::recipe_text::top_ingredients;

pub const CARD_INGREDIENTS: usize = 3;

/// `20분 · 하`, skipping parts the recipe does not have
pub fn recipe_meta(cooking_time: Option<u32>, level: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(minutes) = cooking_time.filter(|m| *m > 0) {
        parts.push(format!("{}분", minutes));
    }
    if let Some(level) = level.map(str::trim).filter(|l| !l.is_empty()) {
        parts.push(level.to_string());
    }
    parts.join(" · ")
}

#[component]
pub fn RecipeCard(recipe: Recipe, #[prop(into)] on_open: Callback<Recipe>) -> impl IntoView {
    let ingredients = top_ingredients(&recipe.ingredient_full, CARD_INGREDIENTS);
    let summary = if ingredients.is_empty() {
        "재료 정보 없음".to_string()
    } else {
        ingredients.join(", ")
    };
    let meta = recipe_meta(recipe.cooking_time, recipe.level_nm.as_deref());
    let name = recipe.recipe_nm_ko.clone();
    let recipe = StoredValue::new(recipe);

    view! {
        <div class="recipe-card" on:click=move |_| on_open.run(recipe.get_value())>
            <div class="recipe-name clamp-2">{name}</div>
            {(!meta.is_empty()).then(|| view! { <div class="recipe-meta">{meta}</div> })}
            <div class="recipe-ingredients clamp-1">{summary}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_meta() {
        assert_eq!(recipe_meta(Some(20), Some("하")), "20분 · 하");
        assert_eq!(recipe_meta(None, Some(" 상 ")), "상");
        assert_eq!(recipe_meta(Some(0), None), "");
    }
}
