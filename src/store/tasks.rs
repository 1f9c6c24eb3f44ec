use crate::domain::Task;
use crate::error::{StoreError, StoreResult};
use crate::persistence::Persistence;
use std::rc::Rc;
use tracing::{debug, info};

/// What a checkbox toggle changed, for the caller's stats update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// State before the toggle
    pub was_complete: bool,
    pub score: u32,
}

pub struct TaskStore {
    tasks: Vec<Task>,
    /// Deleted tasks, most recent last
    undo_cache: Vec<Task>,
    persistence: Rc<dyn Persistence>,
}

impl TaskStore {
    pub fn new(persistence: Rc<dyn Persistence>) -> Self {
        Self {
            tasks: Vec::new(),
            undo_cache: Vec::new(),
            persistence,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_cache.len()
    }

    /// Replace the list with the persisted one (empty if nothing was saved)
    pub fn load(&mut self) -> StoreResult<()> {
        self.tasks = self.persistence.load_tasks()?.unwrap_or_default();
        info!(count = self.tasks.len(), "Loaded tasks");
        Ok(())
    }

    pub fn save(&self) -> StoreResult<()> {
        self.persistence.save_tasks(&self.tasks)
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfBounds {
                index,
                len: self.tasks.len(),
            })
        }
    }

    /// Append a task. Blank text is ignored and returns false.
    pub fn add_task(&mut self, text: &str, score: u32) -> StoreResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        self.tasks.push(Task::new(text, score));
        self.save()?;
        debug!(index = self.tasks.len() - 1, score, "Added task");
        Ok(true)
    }

    /// Replace text and score in place, keeping the completion state
    pub fn edit_task(&mut self, index: usize, text: &str, score: u32) -> StoreResult<()> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.text = text.trim().to_string();
        task.score = score;
        self.save()
    }

    pub fn toggle_complete(&mut self, index: usize) -> StoreResult<ToggleOutcome> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        let outcome = ToggleOutcome {
            was_complete: task.complete,
            score: task.score,
        };
        task.complete = !task.complete;
        self.save()?;
        Ok(outcome)
    }

    /// Remove a task and keep a copy in the undo cache
    pub fn delete_task(&mut self, index: usize) -> StoreResult<Task> {
        self.check_index(index)?;
        let task = self.tasks.remove(index);
        self.undo_cache.push(task.clone());
        self.save()?;
        debug!(index, cached = self.undo_cache.len(), "Deleted task");
        Ok(task)
    }

    /// Re-append the most recently deleted task to the end of the list
    pub fn undo_delete(&mut self) -> StoreResult<Option<Task>> {
        let Some(task) = self.undo_cache.pop() else {
            return Ok(None);
        };
        self.tasks.push(task.clone());
        self.save()?;
        debug!(remaining = self.undo_cache.len(), "Restored deleted task");
        Ok(Some(task))
    }

    /// Move the task at `from` so it ends up at `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> StoreResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let task = self.tasks.remove(from);
        let to = to.min(self.tasks.len());
        self.tasks.insert(to, task);
        self.save()?;
        debug!(from, to, "Reordered task");
        Ok(())
    }
}
