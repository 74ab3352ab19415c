//! Task List Component

use leptos::prelude::*;

use crate::store::{list_entries, TaskListStateStoreFields, TaskStore};

/// One `<li>` per task, keyed by task id
#[component]
pub fn TaskList(store: TaskStore) -> impl IntoView {
    view! {
        <ul class="task-list">
            <For
                each=move || store.tasks().with(|tasks| list_entries(tasks))
                key=|entry| entry.key
                children=|entry| view! { <li>{entry.text}</li> }
            />
        </ul>
    }
}
