use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Format a date as a daily bucket key (YYYY-MM-DD)
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One calendar day in the recent-history table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub sessions: u64,
    pub points: u64,
}

impl DaySummary {
    /// Short weekday name, e.g. "Mon"
    pub fn weekday(&self) -> String {
        self.date.format("%a").to_string()
    }
}

/// Cumulative and per-day statistics (`stats.json`).
///
/// Every field defaults so documents written by older versions load with
/// the missing keys backfilled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsAggregate {
    /// Seconds spent in completed focus phases
    #[serde(default)]
    pub total_focus_time: u64,
    #[serde(default)]
    pub total_sessions: u64,
    #[serde(default)]
    pub longest_streak: u64,
    #[serde(default)]
    pub current_streak: u64,
    /// Sessions completed per calendar day
    #[serde(default)]
    pub daily_records: BTreeMap<String, u64>,
    /// Net task points earned per calendar day
    #[serde(default)]
    pub daily_task_scores: BTreeMap<String, u64>,
}

impl StatsAggregate {
    pub fn sessions_on(&self, date: NaiveDate) -> u64 {
        self.daily_records.get(&day_key(date)).copied().unwrap_or(0)
    }

    pub fn score_on(&self, date: NaiveDate) -> u64 {
        self.daily_task_scores.get(&day_key(date)).copied().unwrap_or(0)
    }

    /// The `days` calendar days ending at `end`, oldest first
    pub fn recent_days(&self, end: NaiveDate, days: u32) -> Vec<DaySummary> {
        (0..days)
            .rev()
            .filter_map(|back| end.checked_sub_days(Days::new(u64::from(back))))
            .map(|date| DaySummary {
                date,
                sessions: self.sessions_on(date),
                points: self.score_on(date),
            })
            .collect()
    }

    /// Total focus time split into (hours, minutes)
    pub fn focus_hours_minutes(&self) -> (u64, u64) {
        let hours = self.total_focus_time / 3600;
        let minutes = (self.total_focus_time % 3600) / 60;
        (hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_key_format() {
        assert_eq!(day_key(date(2024, 3, 7)), "2024-03-07");
    }

    #[test]
    fn test_backfills_missing_keys() {
        let json = r#"{
            "total_focus_time": 3000,
            "total_sessions": 2,
            "longest_streak": 2,
            "current_streak": 2,
            "daily_records": {"2024-03-07": 2}
        }"#;
        let stats: StatsAggregate = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_sessions, 2);
        assert!(stats.daily_task_scores.is_empty());
        assert_eq!(stats.sessions_on(date(2024, 3, 7)), 2);
        assert_eq!(stats.sessions_on(date(2024, 3, 8)), 0);
    }

    #[test]
    fn test_recent_days_oldest_first() {
        let mut stats = StatsAggregate::default();
        stats.daily_records.insert("2024-03-01".to_string(), 3);
        stats.daily_records.insert("2024-03-07".to_string(), 1);
        stats.daily_task_scores.insert("2024-03-06".to_string(), 15);

        let days = stats.recent_days(date(2024, 3, 7), 7);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, date(2024, 3, 1));
        assert_eq!(days[0].sessions, 3);
        assert_eq!(days[0].weekday(), "Fri");
        assert_eq!(days[5].points, 15);
        assert_eq!(days[6].date, date(2024, 3, 7));
        assert_eq!(days[6].sessions, 1);
    }

    #[test]
    fn test_recent_days_crosses_month() {
        let days = StatsAggregate::default().recent_days(date(2024, 3, 2), 3);
        let keys: Vec<String> = days.iter().map(|d| day_key(d.date)).collect();
        assert_eq!(keys, vec!["2024-02-29", "2024-03-01", "2024-03-02"]);
    }

    #[test]
    fn test_focus_hours_minutes() {
        let stats = StatsAggregate {
            total_focus_time: 2 * 3600 + 25 * 60 + 59,
            ..Default::default()
        };
        assert_eq!(stats.focus_hours_minutes(), (2, 25));
    }
}
