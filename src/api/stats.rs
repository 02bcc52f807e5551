//! Statistics Endpoints
//!
//! Progress numbers and the level / category distributions for the dashboard.

use super::{client, ApiRequest};
use crate::error::ApiResult;
use crate::models::{CountRow, DistRow, ProgressStat};

/// Difficulty labels in display order (low, high)
pub const LEVEL_LABELS: [&str; 2] = ["하", "상"];

/// Categories shown on the dashboard
pub const TOP_CATEGORIES: usize = 5;

pub async fn get_progress() -> ApiResult<ProgressStat> {
    client().fetch(ApiRequest::get("/me/stats/progress")).await
}

pub async fn get_level_distribution() -> ApiResult<Vec<DistRow>> {
    let rows: Vec<CountRow> = client().fetch(ApiRequest::get("/me/stats/recipe-logs-level")).await?;
    Ok(level_distribution(&rows))
}

pub async fn get_category_distribution() -> ApiResult<Vec<DistRow>> {
    let rows: Vec<CountRow> = client().fetch(ApiRequest::get("/me/stats/recipe-logs-category")).await?;
    Ok(category_distribution(&rows))
}

fn total(rows: &[CountRow]) -> f64 {
    f64::from(rows.iter().map(|r| r.count).sum::<u32>().max(1))
}

/// Always both levels in `LEVEL_LABELS` order; missing levels count zero
pub fn level_distribution(rows: &[CountRow]) -> Vec<DistRow> {
    let total = total(rows);
    LEVEL_LABELS
        .iter()
        .map(|label| {
            let count = rows.iter().find(|r| r.label == *label).map(|r| r.count).unwrap_or(0);
            DistRow {
                label: label.to_string(),
                count,
                ratio: f64::from(count) / total,
            }
        })
        .collect()
}

/// Largest categories first, top five, ratio over the full total
pub fn category_distribution(rows: &[CountRow]) -> Vec<DistRow> {
    let total = total(rows);
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted
        .into_iter()
        .take(TOP_CATEGORIES)
        .map(|r| DistRow {
            ratio: f64::from(r.count) / total,
            label: r.label,
            count: r.count,
        })
        .collect()
}

/// Bar width for a ratio, as a CSS percentage
pub fn bar_width(ratio: f64) -> String {
    format!("{:.0}%", (ratio.clamp(0.0, 1.0) * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, count: u32) -> CountRow {
        CountRow { label: label.to_string(), count }
    }

    #[test]
    fn test_level_distribution_fills_missing() {
        let dist = level_distribution(&[row("상", 3)]);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].label, "하");
        assert_eq!(dist[0].count, 0);
        assert_eq!(dist[0].ratio, 0.0);
        assert_eq!(dist[1].label, "상");
        assert_eq!(dist[1].ratio, 1.0);
    }

    #[test]
    fn test_level_distribution_empty() {
        let dist = level_distribution(&[]);
        assert!(dist.iter().all(|d| d.count == 0 && d.ratio == 0.0));
    }

    #[test]
    fn test_category_distribution_top_five() {
        let rows = vec![
            row("국/탕", 2),
            row("반찬", 9),
            row("면", 1),
            row("찌개", 4),
            row("밥", 3),
            row("디저트", 1),
        ];
        let dist = category_distribution(&rows);
        let labels: Vec<&str> = dist.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["반찬", "찌개", "밥", "국/탕", "면"]);
        // ratio uses all 20 logs, not just the top five
        assert!((dist[0].ratio - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(0.456), "46%");
        assert_eq!(bar_width(1.7), "100%");
        assert_eq!(bar_width(-0.2), "0%");
    }
}
