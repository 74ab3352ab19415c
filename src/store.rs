//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created by `App` and handed to children as a prop; nothing else owns it.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Task;

/// Client state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskListState {
    /// Tasks in arrival order: server read order, then appended creations
    pub tasks: Vec<Task>,
    /// Text bound to the new-task input
    pub draft_description: String,
}

/// Type alias for the store
pub type TaskStore = Store<TaskListState>;

/// One rendered row of the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Task id, used as the `<For>` key
    pub key: u32,
    pub text: String,
}

/// Map tasks to rendered rows. Pure: same tasks, same rows.
pub fn list_entries(tasks: &[Task]) -> Vec<ListEntry> {
    tasks
        .iter()
        .map(|task| ListEntry {
            key: task.id,
            text: task.description.clone(),
        })
        .collect()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the task list wholesale with a fresh server read
pub fn store_replace_tasks(store: &TaskStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

/// Append a task returned by a successful create, then clear the draft
pub fn store_apply_created(store: &TaskStore, task: Task) {
    store.tasks().write().push(task);
    store.draft_description().set(String::new());
}

/// Apply the outcome of the mount load. On error the list is left as is.
///
/// Returns the number of tasks loaded.
pub fn store_apply_load_result(
    store: &TaskStore,
    result: Result<Vec<Task>, String>,
) -> Result<usize, String> {
    let tasks = result?;
    let count = tasks.len();
    store_replace_tasks(store, tasks);
    Ok(count)
}

/// Apply the outcome of a create. On error neither the list nor the draft
/// changes.
///
/// Returns the id of the created task.
pub fn store_apply_create_result(
    store: &TaskStore,
    result: Result<Task, String>,
) -> Result<u32, String> {
    let task = result?;
    let id = task.id;
    store_apply_created(store, task);
    Ok(id)
}

/// Bind the input's current value to the draft
pub fn store_set_draft(store: &TaskStore, text: String) {
    store.draft_description().set(text);
}
