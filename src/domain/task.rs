use serde::{Deserialize, Serialize};

/// Points a task is worth unless the user picks another value
pub const DEFAULT_TASK_SCORE: u32 = 10;

/// A single to-do entry. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task description (may span several lines)
    pub text: String,
    /// Whether the checkbox is ticked
    #[serde(default)]
    pub complete: bool,
    /// Points awarded when the task is completed
    #[serde(default = "default_score")]
    pub score: u32,
}

fn default_score() -> u32 {
    DEFAULT_TASK_SCORE
}

impl Task {
    pub fn new(text: impl Into<String>, score: u32) -> Self {
        Self {
            text: text.into(),
            complete: false,
            score,
        }
    }

    /// Why this task could not have come from the editor, if it couldn't
    pub fn defect(&self) -> Option<&'static str> {
        if self.text.trim().is_empty() {
            Some("blank text")
        } else if self.score == 0 {
            Some("zero score")
        } else {
            None
        }
    }

    /// Score label shown next to the task
    pub fn score_label(&self) -> String {
        format!("+{}pts", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_incomplete() {
        let task = Task::new("Write report", 10);
        assert_eq!(task.text, "Write report");
        assert!(!task.complete);
        assert_eq!(task.score, 10);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let task: Task = serde_json::from_str(r#"{"text": "Email client"}"#).unwrap();
        assert!(!task.complete);
        assert_eq!(task.score, DEFAULT_TASK_SCORE);
    }

    #[test]
    fn test_defects() {
        assert_eq!(Task::new("ok", 1).defect(), None);
        assert_eq!(Task::new(" \n ", 1).defect(), Some("blank text"));
        assert_eq!(Task::new("ok", 0).defect(), Some("zero score"));
    }

    #[test]
    fn test_score_label() {
        assert_eq!(Task::new("x", 5).score_label(), "+5pts");
    }
}
