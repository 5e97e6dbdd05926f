//! Per-user task list.
//!
//! # Responsibility
//! - Load, mutate and persist the ordered task list of the logged-in user.
//! - Produce the view model the shell renders after every change.
//!
//! # Invariants
//! - A manager only ever reads and writes `tasks:<owner email>`.
//! - Every successful mutation is saved before it returns.
//! - Out-of-range indices are rejected and leave the list unchanged.

use crate::auth::validation::normalize_email;
use crate::model::task::TaskRecord;
use crate::model::user::SessionPayload;
use crate::storage::{keys, read_json, write_json, KeyValueStore, StorageError};
use chrono::Utc;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Placeholder shown instead of an empty list.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No tasks yet — add one!";

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug)]
pub enum TaskError {
    IndexOutOfRange { index: usize, len: usize },
    Storage(StorageError),
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "task index {index} is out of range for {len} task(s)")
            }
            Self::Storage(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl Error for TaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<StorageError> for TaskError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine {
    pub index: usize,
    pub text: String,
    pub completed: bool,
    /// `Done` for open tasks, `Undo` for completed ones.
    pub action_label: &'static str,
}

/// Render output for the task page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub greeting_name: String,
    pub lines: Vec<TaskLine>,
}

impl TaskListView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Display for TaskListView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hello, {}", self.greeting_name)?;
        if self.lines.is_empty() {
            return writeln!(f, "  {EMPTY_LIST_PLACEHOLDER}");
        }
        for line in &self.lines {
            let mark = if line.completed { 'x' } else { ' ' };
            writeln!(
                f,
                "  [{}] {:>3}. {}  ({})",
                mark, line.index, line.text, line.action_label
            )?;
        }
        Ok(())
    }
}

/// Task list bound to one session owner.
pub struct TaskListManager<S: KeyValueStore> {
    store: S,
    owner: SessionPayload,
    storage_key: String,
    tasks: Vec<TaskRecord>,
}

impl<S: KeyValueStore> TaskListManager<S> {
    /// Loads the owner's stored list; a missing key is an empty list.
    pub fn load(store: S, owner: SessionPayload) -> TaskResult<Self> {
        let storage_key = keys::tasks(&normalize_email(&owner.email));
        let tasks = read_json(&store, &storage_key)?.unwrap_or_default();
        Ok(Self {
            store,
            owner,
            storage_key,
            tasks,
        })
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Appends a task stamped with the current time.
    ///
    /// Blank text is ignored and yields `Ok(None)`.
    pub fn add(&mut self, text: &str) -> TaskResult<Option<&TaskRecord>> {
        self.add_at(text, Utc::now().timestamp_millis())
    }

    /// `add` with an explicit creation time in epoch milliseconds.
    pub fn add_at(&mut self, text: &str, created_at: i64) -> TaskResult<Option<&TaskRecord>> {
        let text = text.trim();
        if text.is_empty() {
            debug!("event=task_add module=tasks status=skipped reason=blank_text");
            return Ok(None);
        }

        self.tasks.push(TaskRecord::new(text, created_at));
        if let Err(err) = self.save() {
            self.tasks.pop();
            return Err(err);
        }
        debug!(
            "event=task_add module=tasks status=ok count={}",
            self.tasks.len()
        );
        Ok(self.tasks.last())
    }

    /// Flips `completed` of the task at `index`.
    pub fn toggle(&mut self, index: usize) -> TaskResult<&TaskRecord> {
        self.check_index(index)?;
        self.tasks[index].completed = !self.tasks[index].completed;
        if let Err(err) = self.save() {
            self.tasks[index].completed = !self.tasks[index].completed;
            return Err(err);
        }
        debug!("event=task_toggle module=tasks status=ok index={index}");
        Ok(&self.tasks[index])
    }

    /// Removes and returns the task at `index`; later tasks shift down.
    pub fn remove(&mut self, index: usize) -> TaskResult<TaskRecord> {
        self.check_index(index)?;
        let removed = self.tasks.remove(index);
        if let Err(err) = self.save() {
            self.tasks.insert(index, removed);
            return Err(err);
        }
        debug!(
            "event=task_remove module=tasks status=ok index={index} count={}",
            self.tasks.len()
        );
        Ok(removed)
    }

    /// Current view model.
    pub fn render(&self) -> TaskListView {
        TaskListView {
            greeting_name: self.owner.display_name(),
            lines: self
                .tasks
                .iter()
                .enumerate()
                .map(|(index, task)| TaskLine {
                    index,
                    text: task.text.clone(),
                    completed: task.completed,
                    action_label: task.toggle_label(),
                })
                .collect(),
        }
    }

    fn check_index(&self, index: usize) -> TaskResult<()> {
        if index < self.tasks.len() {
            return Ok(());
        }
        warn!(
            "event=task_index module=tasks status=error error_code=index_out_of_range index={index} count={}",
            self.tasks.len()
        );
        Err(TaskError::IndexOutOfRange {
            index,
            len: self.tasks.len(),
        })
    }

    fn save(&self) -> TaskResult<()> {
        write_json(&self.store, &self.storage_key, &self.tasks)?;
        Ok(())
    }
}
