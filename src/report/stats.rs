use crate::domain::{DaySummary, Task};

/// Task list totals
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub open: usize,
    /// Points of ticked tasks
    pub completed_points: u64,
    /// Points still available from open tasks
    pub open_points: u64,
}

/// Totals over a run of days
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PeriodSummary {
    pub sessions: u64,
    pub points: u64,
    /// Days with at least one session or point
    pub active_days: usize,
    /// Day with the most sessions (earliest wins a tie)
    pub best_day: Option<DaySummary>,
}

/// Calculate task list totals
pub fn calculate_task_summary(tasks: &[Task]) -> TaskSummary {
    let mut summary = TaskSummary {
        total: tasks.len(),
        ..Default::default()
    };
    for task in tasks {
        if task.complete {
            summary.completed += 1;
            summary.completed_points += u64::from(task.score);
        } else {
            summary.open += 1;
            summary.open_points += u64::from(task.score);
        }
    }
    summary
}

/// Calculate totals over the given days
pub fn calculate_period_summary(days: &[DaySummary]) -> PeriodSummary {
    let mut summary = PeriodSummary::default();
    for day in days {
        summary.sessions += day.sessions;
        summary.points += day.points;
        if day.sessions > 0 || day.points > 0 {
            summary.active_days += 1;
        }
        let better = match &summary.best_day {
            Some(best) => day.sessions > best.sessions,
            None => day.sessions > 0,
        };
        if better {
            summary.best_day = Some(day.clone());
        }
    }
    summary
}
