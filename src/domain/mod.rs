pub mod enums;
pub mod quotes;
pub mod stats;
pub mod task;
pub mod timer;

pub use enums::{Button, Screen};
pub use quotes::random_quote;
pub use stats::{day_key, DaySummary, StatsAggregate};
pub use task::{Task, DEFAULT_TASK_SCORE};
pub use timer::{PomodoroTimer, TimerPhase, LONG_BREAK_SECS, SESSIONS_PER_LONG_BREAK};
