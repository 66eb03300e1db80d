use chrono::{DateTime, Utc};

const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// 自 `created_at` 起经过的整天数; 时间在未来时为 0
pub fn age_in_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at).num_days().max(0)
}

/// Average commits per week since creation, rounded to two decimals.
///
/// A repository created today has no elapsed weeks; its frequency is 0.
pub fn commit_frequency(total_commits: usize, age_days: i64) -> f64 {
    if age_days <= 0 {
        return 0.0;
    }
    let weeks = age_days as f64 / DAYS_PER_WEEK;
    round_two_decimals(total_commits as f64 / weeks)
}

pub fn age_in_years(age_days: i64) -> f64 {
    age_days as f64 / DAYS_PER_YEAR
}

pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}
