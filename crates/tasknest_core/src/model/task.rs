//! To-do item record.

use serde::{Deserialize, Serialize};

/// One entry of a user's ordered task list.
///
/// Position in the stored array is the display order; there is no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub text: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl TaskRecord {
    pub fn new(text: impl Into<String>, created_at: i64) -> Self {
        Self {
            text: text.into(),
            completed: false,
            created_at,
        }
    }

    /// Label of the control that flips `completed`.
    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Undo"
        } else {
            "Done"
        }
    }
}
