//! Recipe Text Normalization
//!
//! The recipe endpoints send ingredients, steps and tips as arrays, objects
//! or free text depending on the source row. These helpers flatten all of
//! them into display lines.

use serde_json::Value;

/// Scalar to display text; `null` is empty
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

fn non_blank(items: impl IntoIterator<Item = String>) -> Vec<String> {
    items.into_iter().filter(|s| !s.trim().is_empty()).collect()
}

/// Step and tip lines: arrays as-is, strings split per line, objects by value
pub fn to_lines(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => non_blank(items.iter().map(scalar_text)),
        Value::String(s) => non_blank(s.lines().map(|line| line.trim().to_string())),
        Value::Object(map) => non_blank(map.values().map(scalar_text)),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

/// Ingredient items: arrays as-is, `{"name": "amount"}` objects as
/// `"name amount"`, strings split on `,`, `·` and newlines
pub fn to_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => non_blank(items.iter().map(scalar_text)),
        Value::Object(map) => non_blank(map.iter().map(|(key, amount)| {
            let amount = scalar_text(amount);
            if amount.is_empty() {
                key.trim().to_string()
            } else {
                format!("{} {}", key.trim(), amount)
            }
        })),
        Value::String(s) => non_blank(s.split([',', '·', '\n']).map(|part| part.trim().to_string())),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

/// First `n` ingredients for a recipe card. JSON encoded as a string is
/// decoded first; internal whitespace is collapsed.
pub fn top_ingredients(value: &Value, n: usize) -> Vec<String> {
    let decoded = match value {
        Value::String(s) if looks_like_json(s) => serde_json::from_str(s.trim()).unwrap_or_else(|_| value.clone()),
        _ => value.clone(),
    };
    to_items(&decoded)
        .into_iter()
        .map(|item| item.split_whitespace().collect::<Vec<_>>().join(" "))
        .take(n)
        .collect()
}

fn looks_like_json(s: &str) -> bool {
    let s = s.trim();
    (s.starts_with('[') && s.ends_with(']')) || (s.starts_with('{') && s.ends_with('}'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_lines() {
        assert_eq!(to_lines(&json!(["물 끓이기", " ", "면 넣기"])), vec!["물 끓이기", "면 넣기"]);
        assert_eq!(to_lines(&json!("1. 썰기\n\n 2. 볶기 ")), vec!["1. 썰기", "2. 볶기"]);
        assert_eq!(to_lines(&json!({"1": "썰기", "2": "볶기"})), vec!["썰기", "볶기"]);
        assert!(to_lines(&Value::Null).is_empty());
    }

    #[test]
    fn test_to_items() {
        assert_eq!(to_items(&json!("양파 1개, 대파·마늘\n간장")), vec!["양파 1개", "대파", "마늘", "간장"]);
        assert_eq!(to_items(&json!({"두부": "1모", "소금": ""})), vec!["두부 1모", "소금"]);
        assert_eq!(to_items(&json!(["계란", 2])), vec!["계란", "2"]);
    }

    #[test]
    fn test_top_ingredients() {
        let encoded = json!(r#"["돼지고기   200g", "김치", "두부", "대파"]"#);
        assert_eq!(top_ingredients(&encoded, 3), vec!["돼지고기 200g", "김치", "두부"]);

        let plain = json!("[양념] 간장, 설탕");
        assert_eq!(top_ingredients(&plain, 3), vec!["[양념] 간장", "설탕"]);

        assert!(top_ingredients(&Value::Null, 3).is_empty());
    }
}
