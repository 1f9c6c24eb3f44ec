use crate::config::{DataPaths, SessionDurations};
use crate::domain::{StatsAggregate, Task};
use crate::error::{StoreError, StoreResult};
use crate::persistence::files::{atomic_write, read_if_exists};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Task list document (`state.json`)
#[derive(Debug, Default, Deserialize)]
struct TaskDocument {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Serialize)]
struct TaskDocumentRef<'a> {
    tasks: &'a [Task],
}

/// Load/save access to the persisted documents.
///
/// A missing document loads as `None`; a document that exists but does not
/// parse is an error.
pub trait Persistence {
    fn load_tasks(&self) -> StoreResult<Option<Vec<Task>>>;
    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()>;
    fn load_stats(&self) -> StoreResult<Option<StatsAggregate>>;
    fn save_stats(&self, stats: &StatsAggregate) -> StoreResult<()>;
    fn load_config(&self) -> StoreResult<Option<SessionDurations>>;
    fn save_config(&self, config: &SessionDurations) -> StoreResult<()>;
}

/// Serialize a document as pretty JSON
pub fn encode<T: Serialize>(document: &T) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Parse a document, attributing failures to `path`
pub fn decode<T: DeserializeOwned>(path: &Path, content: &str) -> StoreResult<T> {
    serde_json::from_str(content).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Reject task lists holding entries the editor would never produce
fn checked_tasks(path: &Path, tasks: Vec<Task>) -> StoreResult<Vec<Task>> {
    for (index, task) in tasks.iter().enumerate() {
        if let Some(defect) = task.defect() {
            return Err(StoreError::Invalid {
                path: path.to_path_buf(),
                reason: format!("task {index} has {defect}"),
            });
        }
    }
    Ok(tasks)
}

fn checked_config(path: &Path, config: SessionDurations) -> StoreResult<SessionDurations> {
    match config.out_of_range() {
        Some(reason) => Err(StoreError::Invalid {
            path: path.to_path_buf(),
            reason,
        }),
        None => Ok(config),
    }
}

/// Documents stored as JSON files in the data directory
#[derive(Debug, Clone)]
pub struct JsonFiles {
    paths: DataPaths,
}

impl JsonFiles {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }

    fn load<T: DeserializeOwned>(&self, path: &Path) -> StoreResult<Option<T>> {
        let content = read_if_exists(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.map(|c| decode(path, &c)).transpose()
    }

    fn save<T: Serialize>(&self, path: &Path, document: &T) -> StoreResult<()> {
        let json = encode(document)?;
        atomic_write(path, &json).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Persistence for JsonFiles {
    fn load_tasks(&self) -> StoreResult<Option<Vec<Task>>> {
        let document: Option<TaskDocument> = self.load(&self.paths.tasks)?;
        document
            .map(|d| checked_tasks(&self.paths.tasks, d.tasks))
            .transpose()
    }

    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()> {
        self.save(&self.paths.tasks, &TaskDocumentRef { tasks })
    }

    fn load_stats(&self) -> StoreResult<Option<StatsAggregate>> {
        self.load(&self.paths.stats)
    }

    fn save_stats(&self, stats: &StatsAggregate) -> StoreResult<()> {
        self.save(&self.paths.stats, stats)
    }

    fn load_config(&self) -> StoreResult<Option<SessionDurations>> {
        let config: Option<SessionDurations> = self.load(&self.paths.config)?;
        config
            .map(|c| checked_config(&self.paths.config, c))
            .transpose()
    }

    fn save_config(&self, config: &SessionDurations) -> StoreResult<()> {
        self.save(&self.paths.config, config)
    }
}
