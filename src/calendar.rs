//! Calendar Month Grid
//!
//! Pure date helpers behind the calendar page: a fixed 6-week grid that
//! starts on Monday and buckets of selected recipes per day.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::models::SelectedRecipe;

/// 6 weeks x 7 days
pub const GRID_CELLS: usize = 42;

/// Weekday headers, Monday first
pub const WEEKDAY_LABELS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days of the neighbouring months
    pub in_month: bool,
}

/// First day of a displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    first: NaiveDate,
}

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self { first: date.with_day(1).unwrap_or(date) }
    }

    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn prev(&self) -> Self {
        // day 1 minus one day always lands in the previous month
        Self::of(self.first - Duration::days(1))
    }

    pub fn next(&self) -> Self {
        Self::of(self.first + Duration::days(31))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// `2025년 3월`
    pub fn label(&self) -> String {
        format!("{}년 {}월", self.year(), self.month())
    }
}

/// `YYYY-MM-DD`
pub fn ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date the way the backend may send it: ISO date, ISO datetime,
/// or a `Y.M.D` / `Y/M/D` prefix with 1-2 digit month and day.
pub fn parse_local_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    let head: String = raw.chars().take(10).collect();
    let normalized = head.replace(['.', '/'], "-");
    let mut parts = normalized.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(y, 4, 4) || !digits(m, 1, 2) || !digits(d, 1, 2) {
        return None;
    }
    NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
}

/// 42 cells starting on the Monday on or before the 1st
pub fn month_grid(month: Month) -> Vec<DayCell> {
    let first = month.first_day();
    let lead = first.weekday().num_days_from_monday() as i64;
    let start = first - Duration::days(lead);
    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            DayCell { date, in_month: month.contains(date) }
        })
        .collect()
}

/// Selected recipes of the displayed month, grouped by day of month.
/// Rows with unparsable dates are skipped.
pub fn month_buckets(rows: &[SelectedRecipe], month: Month) -> BTreeMap<u32, Vec<SelectedRecipe>> {
    let mut buckets: BTreeMap<u32, Vec<SelectedRecipe>> = BTreeMap::new();
    for row in rows {
        let Some(date) = parse_local_date(&row.selected_date) else {
            log::debug!("skipping selected recipe {} with date {:?}", row.selected_id, row.selected_date);
            continue;
        };
        if month.contains(date) {
            buckets.entry(date.day()).or_default().push(row.clone());
        }
    }
    buckets
}
