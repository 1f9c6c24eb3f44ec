use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SESSION_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Largest accepted focus/break length in minutes
pub const MAX_MINUTES: u32 = 24 * 60;

/// Two clicks on the same task within this window open the editor
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 300;

/// Persisted focus/break lengths (`config.json`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDurations {
    #[serde(default = "default_session_minutes")]
    pub session_minutes: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

fn default_session_minutes() -> u32 {
    DEFAULT_SESSION_MINUTES
}

fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

impl Default for SessionDurations {
    fn default() -> Self {
        Self {
            session_minutes: DEFAULT_SESSION_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl SessionDurations {
    pub fn focus_secs(&self) -> u32 {
        self.session_minutes.clamp(1, MAX_MINUTES) * 60
    }

    pub fn break_secs(&self) -> u32 {
        self.break_minutes.clamp(1, MAX_MINUTES) * 60
    }

    /// Describe the first length outside `1..=MAX_MINUTES`, if any
    pub fn out_of_range(&self) -> Option<String> {
        [
            ("session_minutes", self.session_minutes),
            ("break_minutes", self.break_minutes),
        ]
        .into_iter()
        .find(|(_, minutes)| !(1..=MAX_MINUTES).contains(minutes))
        .map(|(field, minutes)| format!("{field} is {minutes}, expected 1 to {MAX_MINUTES}"))
    }
}

/// Pointer arbitration thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSettings {
    /// Max gap between two clicks on the same task to count as a double click
    pub double_click_ms: u64,
    /// Cells the pointer must move past (in either axis) before a press becomes a drag
    pub drag_threshold: u16,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            // A terminal cell is already wider than the few pixels a hand jitters
            drag_threshold: 0,
        }
    }
}

/// Locations of every file the app reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub root: PathBuf,
    pub tasks: PathBuf,
    pub stats: PathBuf,
    pub config: PathBuf,
    pub logs: PathBuf,
    pub alarms: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            tasks: root.join("state.json"),
            stats: root.join("stats.json"),
            config: root.join("config.json"),
            logs: root.join("logs"),
            alarms: root.join("alarms"),
            root,
        }
    }
}

/// Everything decided at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paths: DataPaths,
    pub durations: SessionDurations,
    pub input: InputSettings,
}

impl AppConfig {
    pub fn new(paths: DataPaths, durations: SessionDurations) -> Self {
        Self {
            paths,
            durations,
            input: InputSettings::default(),
        }
    }
}
