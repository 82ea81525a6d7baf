//! Task model and task file loading.
//!
//! A task file is a JSON array of `{ id, name, startDate, endDate }` objects.
//! Ids may be strings or non-negative integers. Loading validates syntax only:
//! inverted ranges and duplicate ids are logged and kept as-is.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::calendar::days_between;

/// Opaque task identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTaskId", into = "String")]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Wire form of a task id.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTaskId {
    Text(String),
    Number(u64),
}

impl From<RawTaskId> for TaskId {
    fn from(raw: RawTaskId) -> Self {
        match raw {
            RawTaskId::Text(s) => Self(s),
            RawTaskId::Number(n) => n.into(),
        }
    }
}

/// A scheduled task spanning whole calendar days (both ends inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Task {
    /// Create a new task.
    pub fn new(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
        }
    }

    /// True when the end date precedes the start date.
    pub fn is_inverted(&self) -> bool {
        self.end_date < self.start_date
    }

    /// Number of calendar days covered, counting both ends.
    ///
    /// Inverted ranges yield zero or a negative count.
    pub fn duration_days(&self) -> i64 {
        days_between(self.start_date, self.end_date) + 1
    }
}

/// Errors that can occur when loading a task file.
#[derive(Debug, Error)]
pub enum TaskFileError {
    /// The file could not be read.
    #[error("failed to read task file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid task list.
    #[error("invalid task file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a JSON task list.
pub fn parse_tasks(json: &str) -> Result<Vec<Task>, serde_json::Error> {
    let tasks: Vec<Task> = serde_json::from_str(json)?;
    report_suspicious(&tasks);
    Ok(tasks)
}

/// Load a task list from a JSON file.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, TaskFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| TaskFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tasks = parse_tasks(&content).map_err(|source| TaskFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

fn report_suspicious(tasks: &[Task]) {
    let mut seen = HashSet::new();
    for task in tasks {
        if task.is_inverted() {
            warn!(
                id = %task.id,
                start = %task.start_date,
                end = %task.end_date,
                "task ends before it starts"
            );
        }
        if !seen.insert(&task.id) {
            warn!(id = %task.id, "duplicate task id");
        }
    }
}
