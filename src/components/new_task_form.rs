//! New Task Form Component
//!
//! Controlled text input plus submit button. Submitting posts the draft and
//! appends whatever the service returns.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{store_apply_create_result, store_set_draft, TaskListStateStoreFields, TaskStore};

#[component]
pub fn NewTaskForm(store: TaskStore) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Empty drafts are sent as-is
        let description = store.draft_description().get_untracked();

        spawn_local(async move {
            match store_apply_create_result(&store, api::create_task(&description).await) {
                Ok(id) => {
                    web_sys::console::log_1(&format!("[FORM] Created task #{}", id).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[FORM] Create failed: {}", e).into());
                }
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=submit>
            <input
                type="text"
                placeholder="O que precisa ser feito?"
                prop:value=move || store.draft_description().get()
                on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
            />
            <button type="submit">"Adicionar"</button>
        </form>
    }
}
