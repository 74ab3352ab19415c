//! UI Components
//!
//! Leptos components for the task list view.

mod new_task_form;
mod task_list;

pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
