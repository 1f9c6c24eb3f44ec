use crate::domain::{day_key, StatsAggregate};
use crate::error::StoreResult;
use crate::persistence::Persistence;
use crate::ticker::Clock;
use std::rc::Rc;
use tracing::{debug, info};

pub struct StatsStore {
    stats: StatsAggregate,
    persistence: Rc<dyn Persistence>,
    clock: Rc<dyn Clock>,
}

impl StatsStore {
    pub fn new(persistence: Rc<dyn Persistence>, clock: Rc<dyn Clock>) -> Self {
        Self {
            stats: StatsAggregate::default(),
            persistence,
            clock,
        }
    }

    pub fn stats(&self) -> &StatsAggregate {
        &self.stats
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Points earned today
    pub fn today_score(&self) -> u64 {
        self.stats.score_on(self.clock.today())
    }

    /// Load the persisted aggregate, backfill missing keys and write it back
    pub fn load(&mut self) -> StoreResult<()> {
        self.stats = self.persistence.load_stats()?.unwrap_or_default();
        info!(
            total_sessions = self.stats.total_sessions,
            days = self.stats.daily_records.len(),
            "Loaded stats"
        );
        self.save()
    }

    pub fn save(&self) -> StoreResult<()> {
        self.persistence.save_stats(&self.stats)
    }

    /// Count one completed focus phase of `duration_secs`
    pub fn record_session(&mut self, duration_secs: u64) -> StoreResult<()> {
        let stats = &mut self.stats;
        stats.total_focus_time += duration_secs;
        stats.total_sessions += 1;
        stats.current_streak += 1;
        if stats.current_streak > stats.longest_streak {
            stats.longest_streak = stats.current_streak;
        }
        let today = day_key(self.clock.today());
        *stats.daily_records.entry(today.clone()).or_insert(0) += 1;
        info!(day = %today, duration_secs, total = stats.total_sessions, "Recorded session");
        self.save()
    }

    /// Add a completed task's points to today's bucket
    pub fn record_task_completion(&mut self, score: u32) -> StoreResult<()> {
        let today = day_key(self.clock.today());
        *self.stats.daily_task_scores.entry(today.clone()).or_insert(0) += u64::from(score);
        debug!(day = %today, score, "Recorded task score");
        self.save()
    }

    /// Take an unticked task's points back out of today's bucket, never below zero
    pub fn deduct_task_score(&mut self, score: u32) -> StoreResult<()> {
        let today = day_key(self.clock.today());
        if let Some(points) = self.stats.daily_task_scores.get_mut(&today) {
            *points = points.saturating_sub(u64::from(score));
            debug!(day = %today, score, left = *points, "Deducted task score");
        }
        self.save()
    }
}
