pub mod stats;
pub mod tasks;

pub use stats::StatsStore;
pub use tasks::{TaskStore, ToggleOutcome};
