use crate::config::DataPaths;
use crate::domain::{StatsAggregate, Task};
use crate::persistence::{JsonFiles, Persistence};
use crate::report::stats::{calculate_period_summary, calculate_task_summary};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Days covered by the history table
const REPORT_DAYS: u32 = 7;

/// Format seconds as "Xh Ym" or "Xm" for display
fn format_duration(secs: u64) -> String {
    let total_mins = secs / 60;
    if total_mins < 60 {
        format!("{}m", total_mins)
    } else {
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

/// First line of a task, for one-line listings
fn headline(task: &Task) -> &str {
    task.text.lines().next().unwrap_or_default()
}

/// Build the markdown report for the seven days ending at `date`
pub fn build_report(stats: &StatsAggregate, tasks: &[Task], date: NaiveDate) -> String {
    let days = stats.recent_days(date, REPORT_DAYS);
    let period = calculate_period_summary(&days);
    let task_summary = calculate_task_summary(tasks);

    let mut report = String::new();

    // Header
    report.push_str(&format!("# Focus Flow Report - {}\n\n", date));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Sessions on {}:** {}\n",
        date,
        stats.sessions_on(date)
    ));
    report.push_str(&format!("- **Points on {}:** {}\n", date, stats.score_on(date)));
    report.push_str(&format!(
        "- **Total Focus Time:** {}\n",
        format_duration(stats.total_focus_time)
    ));
    report.push_str(&format!("- **Total Sessions:** {}\n", stats.total_sessions));
    report.push_str(&format!(
        "- **Streak:** {} current, {} longest\n\n",
        stats.current_streak, stats.longest_streak
    ));

    // History Section
    report.push_str(&format!("## Last {} Days\n\n", REPORT_DAYS));
    report.push_str("| Day | Date | Sessions | Points |\n");
    report.push_str("|-----|------|----------|--------|\n");
    for day in &days {
        report.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            day.weekday(),
            day.date,
            day.sessions,
            day.points
        ));
    }
    report.push('\n');
    report.push_str(&format!(
        "- **Week Total:** {} sessions, {} points, {} active days\n",
        period.sessions, period.points, period.active_days
    ));
    if let Some(best) = &period.best_day {
        report.push_str(&format!(
            "- **Best Day:** {} {} ({} sessions)\n",
            best.weekday(),
            best.date,
            best.sessions
        ));
    }
    report.push('\n');

    // Tasks Section
    report.push_str("## Tasks\n\n");
    report.push_str(&format!(
        "- **Completed:** {} of {} ({} pts earned, {} pts open)\n\n",
        task_summary.completed, task_summary.total, task_summary.completed_points, task_summary.open_points
    ));
    if tasks.is_empty() {
        report.push_str("_No tasks._\n");
    }
    for task in tasks {
        let mark = if task.complete { "x" } else { " " };
        report.push_str(&format!(
            "- [{}] {} ({})\n",
            mark,
            headline(task),
            task.score_label()
        ));
    }

    report
}

/// Generate a report for the given date from the saved documents
pub fn generate_report(
    paths: &DataPaths,
    date: NaiveDate,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let files = JsonFiles::new(paths);
    let stats = files
        .load_stats()
        .context("Failed to load stats")?
        .unwrap_or_default();
    let tasks = files
        .load_tasks()
        .context("Failed to load tasks")?
        .unwrap_or_default();

    let report = build_report(&stats, &tasks, date);

    // Determine output path
    let output = match output_path {
        Some(path) => path,
        None => paths.root.join(format!("report-{}.md", date)),
    };

    fs::write(&output, report)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_stats() -> StatsAggregate {
        let mut stats = StatsAggregate {
            total_focus_time: 3 * 1500,
            total_sessions: 3,
            longest_streak: 3,
            current_streak: 3,
            ..Default::default()
        };
        stats.daily_records.insert("2024-03-05".to_string(), 1);
        stats.daily_records.insert("2024-03-07".to_string(), 2);
        stats.daily_task_scores.insert("2024-03-07".to_string(), 15);
        stats
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(25 * 60), "25m");
        assert_eq!(format_duration(3600), "1h");
        assert_eq!(format_duration(4500), "1h 15m");
    }

    #[test]
    fn test_build_report_sections() {
        let mut done = Task::new("Write report\nwith charts", 10);
        done.complete = true;
        let tasks = vec![done, Task::new("Email client", 5)];

        let report = build_report(&sample_stats(), &tasks, date(2024, 3, 7));

        assert!(report.starts_with("# Focus Flow Report - 2024-03-07\n"));
        assert!(report.contains("- **Sessions on 2024-03-07:** 2\n"));
        assert!(report.contains("- **Points on 2024-03-07:** 15\n"));
        assert!(report.contains("- **Total Focus Time:** 1h 15m\n"));
        assert!(report.contains("| Fri | 2024-03-01 | 0 | 0 |\n"));
        assert!(report.contains("| Thu | 2024-03-07 | 2 | 15 |\n"));
        assert!(report.contains("- **Week Total:** 3 sessions, 15 points, 2 active days\n"));
        assert!(report.contains("- **Best Day:** Thu 2024-03-07 (2 sessions)\n"));
        assert!(report.contains("- [x] Write report (+10pts)\n"));
        assert!(report.contains("- [ ] Email client (+5pts)\n"));
        assert!(!report.contains("with charts"));
    }

    #[test]
    fn test_build_report_empty() {
        let report = build_report(&StatsAggregate::default(), &[], date(2024, 3, 7));
        assert!(report.contains("_No tasks._"));
        assert!(!report.contains("Best Day"));
    }

    #[test]
    fn test_generate_report_writes_default_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(temp_dir.path());
        let files = JsonFiles::new(&paths);
        files.save_stats(&sample_stats()).unwrap();

        let output = generate_report(&paths, date(2024, 3, 7), None).unwrap();
        assert_eq!(output, temp_dir.path().join("report-2024-03-07.md"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("- **Total Sessions:** 3\n"));
        assert!(content.contains("_No tasks._"));
    }

    #[test]
    fn test_generate_report_custom_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(temp_dir.path());
        let target = temp_dir.path().join("out.md");

        let output = generate_report(&paths, date(2024, 3, 7), Some(target.clone())).unwrap();
        assert_eq!(output, target);
        assert!(target.exists());
    }

    #[test]
    fn test_generate_report_malformed_stats_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(temp_dir.path());
        fs::write(&paths.stats, "{oops").unwrap();
        assert!(generate_report(&paths, date(2024, 3, 7), None).is_err());
    }
}
