//! Task List Frontend App
//!
//! Root component: owns the task store and loads the collection on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{NewTaskForm, TaskList};
use crate::store::{store_apply_load_result, TaskListState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(TaskListState::default());

    // Load tasks on mount. No signal is read here, so this runs once.
    Effect::new(move |_| {
        web_sys::console::log_1(&"[APP] Loading tasks".into());
        spawn_local(async move {
            match store_apply_load_result(&store, api::list_tasks().await) {
                Ok(count) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} tasks", count).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Error loading tasks: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="App">
            <header class="App-header">
                <h1>"Minha Lista de Tarefas"</h1>

                <NewTaskForm store=store />

                <TaskList store=store />
            </header>
        </div>
    }
}
