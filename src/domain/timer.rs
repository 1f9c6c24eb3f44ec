use crate::config::SessionDurations;

/// Length of the long break taken after every fourth focus session
pub const LONG_BREAK_SECS: u32 = 30 * 60;

/// Focus sessions per cycle; the last one is followed by a long break
pub const SESSIONS_PER_LONG_BREAK: u32 = 4;

/// Derived classification of the timer, used for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Not running and nothing elapsed yet
    Waiting,
    /// Focus phase, running or partially elapsed
    Focusing,
    /// Short or long break
    Break,
}

impl TimerPhase {
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Waiting => "Waiting to start",
            TimerPhase::Focusing => "Focusing",
            TimerPhase::Break => "Take a break",
        }
    }
}

/// Countdown that cycles focus and break phases; the caller drives it with `update`
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    /// Length of the current phase in seconds
    total: u32,
    /// Seconds left in the current phase (0 ..= total)
    remaining: f64,
    running: bool,
    is_break: bool,
    /// Position within the four-session cycle (1..=4)
    session_count: u32,
    /// Focus sessions finished since startup
    sessions_completed: u32,
    /// Configured focus length in seconds
    focus_secs: u32,
    /// Configured short break length in seconds
    break_secs: u32,
}

impl PomodoroTimer {
    pub fn new(durations: &SessionDurations) -> Self {
        let focus_secs = durations.focus_secs();
        Self {
            total: focus_secs,
            remaining: focus_secs as f64,
            running: false,
            is_break: false,
            session_count: 1,
            sessions_completed: 0,
            focus_secs,
            break_secs: durations.break_secs(),
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_break(&self) -> bool {
        self.is_break
    }

    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    pub fn focus_secs(&self) -> u32 {
        self.focus_secs
    }

    pub fn break_secs(&self) -> u32 {
        self.break_secs
    }

    /// True when the current phase has not started ticking yet
    pub fn is_waiting(&self) -> bool {
        !self.running && self.remaining == self.total as f64
    }

    pub fn phase(&self) -> TimerPhase {
        if self.is_waiting() {
            TimerPhase::Waiting
        } else if self.is_break {
            TimerPhase::Break
        } else {
            TimerPhase::Focusing
        }
    }

    /// Status line text
    pub fn get_status(&self) -> &'static str {
        self.phase().label()
    }

    /// Remaining time as `MM:SS`, truncating fractional seconds
    pub fn display(&self) -> String {
        let secs = self.remaining.max(0.0) as u64;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Rewind the current phase, optionally with a new length
    pub fn reset(&mut self, new_total: Option<u32>) {
        if let Some(total) = new_total {
            self.total = total;
        }
        self.remaining = self.total as f64;
        self.running = false;
    }

    /// Back to a fresh focus phase at the start of a cycle
    pub fn reset_full(&mut self) {
        self.total = self.focus_secs;
        self.remaining = self.total as f64;
        self.running = false;
        self.is_break = false;
        self.session_count = 1;
    }

    /// Replace the configured focus/break lengths.
    ///
    /// The current countdown is untouched; the new lengths apply from the
    /// next reset or phase transition.
    pub fn configure(&mut self, durations: &SessionDurations) {
        self.focus_secs = durations.focus_secs();
        self.break_secs = durations.break_secs();
    }

    /// Advance by `dt` seconds. Returns true on the tick the countdown hits zero.
    pub fn update(&mut self, dt: f64) -> bool {
        if !self.running {
            return false;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.running = false;
            return true;
        }
        false
    }

    /// Finish a focus phase and enter the following break
    pub fn complete_session(&mut self) {
        self.sessions_completed += 1;
        if self.session_count >= SESSIONS_PER_LONG_BREAK {
            self.total = LONG_BREAK_SECS;
            self.session_count = 1;
        } else {
            self.total = self.break_secs;
            self.session_count += 1;
        }
        self.is_break = true;
        self.remaining = self.total as f64;
        self.running = false;
    }

    /// Finish a break and prepare the next focus phase
    pub fn start_focus_session(&mut self) {
        self.total = self.focus_secs;
        self.is_break = false;
        self.remaining = self.total as f64;
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_minute_config_keeps_total_positive() {
        let mut timer = PomodoroTimer::new(&SessionDurations {
            session_minutes: 0,
            break_minutes: 0,
        });
        assert_eq!(timer.total(), 60);
        timer.start();
        assert!(!timer.update(0.0));
    }

    fn standard_timer() -> PomodoroTimer {
        PomodoroTimer::new(&SessionDurations {
            session_minutes: 25,
            break_minutes: 5,
        })
    }

    #[test]
    fn test_new_timer_is_waiting() {
        let timer = standard_timer();
        assert_eq!(timer.total(), 1500);
        assert_eq!(timer.remaining(), 1500.0);
        assert!(!timer.is_running());
        assert_eq!(timer.session_count(), 1);
        assert_eq!(timer.get_status(), "Waiting to start");
        assert_eq!(timer.display(), "25:00");
    }

    #[test]
    fn test_update_ignored_while_stopped() {
        let mut timer = standard_timer();
        assert!(!timer.update(10.0));
        assert_eq!(timer.remaining(), 1500.0);
    }

    #[test]
    fn test_start_is_idempotent_and_keeps_remaining() {
        let mut timer = standard_timer();
        timer.start();
        timer.update(100.0);
        timer.start();
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), 1400.0);
        assert_eq!(timer.get_status(), "Focusing");
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = standard_timer();
        timer.start();
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_completion_reported_exactly_once() {
        let mut timer = standard_timer();
        timer.start();

        let mut completions = 0;
        let mut elapsed = 0.0;
        // 1/60th of a second ticks, well past the end of the phase
        while elapsed < 1600.0 {
            if timer.update(1.0 / 60.0) {
                completions += 1;
                assert!(elapsed + 1.0 / 60.0 >= 1500.0 - 1e-6);
            }
            elapsed += 1.0 / 60.0;
        }

        assert_eq!(completions, 1);
        assert_eq!(timer.remaining(), 0.0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_uneven_ticks_clamp_to_zero() {
        let mut timer = standard_timer();
        timer.reset(Some(10));
        timer.start();
        assert!(!timer.update(3.5));
        assert!(!timer.update(0.0));
        assert!(!timer.update(6.0));
        assert!(timer.update(7.25));
        assert_eq!(timer.remaining(), 0.0);
    }

    #[test]
    fn test_restart_at_zero_reports_again() {
        let mut timer = standard_timer();
        timer.reset(Some(1));
        timer.start();
        assert!(timer.update(2.0));
        timer.start();
        assert!(timer.update(0.1));
        assert_eq!(timer.remaining(), 0.0);
    }

    #[test]
    fn test_display_truncates() {
        let mut timer = standard_timer();
        timer.remaining = 125.9;
        assert_eq!(timer.display(), "02:05");

        timer.remaining = 59.999;
        assert_eq!(timer.display(), "00:59");

        timer.remaining = 0.0;
        assert_eq!(timer.display(), "00:00");
    }

    #[test]
    fn test_reset_keeps_or_replaces_total() {
        let mut timer = standard_timer();
        timer.start();
        timer.update(42.0);

        timer.reset(None);
        assert_eq!(timer.total(), 1500);
        assert_eq!(timer.remaining(), 1500.0);
        assert!(!timer.is_running());

        timer.reset(Some(600));
        assert_eq!(timer.total(), 600);
        assert_eq!(timer.remaining(), 600.0);
    }

    #[test]
    fn test_complete_session_short_break() {
        let mut timer = standard_timer();
        timer.complete_session();
        assert_eq!(timer.total(), 300);
        assert_eq!(timer.remaining(), 300.0);
        assert_eq!(timer.session_count(), 2);
        assert_eq!(timer.sessions_completed(), 1);
        assert!(timer.is_break());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_complete_fourth_session_long_break() {
        let mut timer = standard_timer();
        timer.session_count = 4;
        timer.complete_session();
        assert_eq!(timer.total(), 1800);
        assert_eq!(timer.session_count(), 1);
        assert!(timer.is_break());
    }

    #[test]
    fn test_break_status_once_started() {
        let mut timer = standard_timer();
        timer.complete_session();
        // A fresh break has not started yet
        assert_eq!(timer.get_status(), "Waiting to start");
        timer.start();
        timer.update(1.0);
        assert_eq!(timer.get_status(), "Take a break");
        assert_eq!(timer.phase(), TimerPhase::Break);
    }

    #[test]
    fn test_start_focus_session_restores_focus_length() {
        let mut timer = standard_timer();
        timer.complete_session();
        timer.start_focus_session();
        assert_eq!(timer.total(), 1500);
        assert_eq!(timer.remaining(), 1500.0);
        assert!(!timer.is_break());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_four_full_cycles() {
        let mut timer = standard_timer();

        for cycle in 1..=4 {
            timer.start();
            assert!(timer.update(1500.0));
            timer.complete_session();

            if cycle < 4 {
                assert_eq!(timer.total(), 300);
                assert_eq!(timer.session_count(), cycle + 1);
            } else {
                assert_eq!(timer.total(), 1800);
                assert_eq!(timer.session_count(), 1);
            }

            timer.start();
            assert!(timer.update(timer.total() as f64));
            timer.start_focus_session();
            assert_eq!(timer.total(), 1500);
        }

        assert_eq!(timer.sessions_completed(), 4);
    }

    #[test]
    fn test_reset_full() {
        let mut timer = standard_timer();
        timer.complete_session();
        timer.complete_session();
        timer.start();
        timer.reset_full();
        assert_eq!(timer.total(), 1500);
        assert!(!timer.is_break());
        assert_eq!(timer.session_count(), 1);
        assert!(!timer.is_running());
        // Completed sessions are history, not reset
        assert_eq!(timer.sessions_completed(), 2);
    }

    #[test]
    fn test_configure_defers_to_next_transition() {
        let mut timer = standard_timer();
        timer.start();
        timer.update(60.0);

        timer.configure(&SessionDurations {
            session_minutes: 50,
            break_minutes: 10,
        });
        assert_eq!(timer.total(), 1500);
        assert_eq!(timer.remaining(), 1440.0);
        assert!(timer.is_running());

        timer.complete_session();
        assert_eq!(timer.total(), 600);
        timer.start_focus_session();
        assert_eq!(timer.total(), 3000);
    }
}
