//! Task List Component
//!
//! Renders the fetched collection, or an empty-state message.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::AppContext;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let tasks = ctx.tasks;

    view! {
        <div class="task-list">
            <Show when=move || tasks.get().is_empty()>
                <div class="empty-state">"No tasks yet, add the first one!"</div>
            </Show>
            <For
                each=move || tasks.get()
                key=|task| {
                    // Key on every field so a reload with changed state
                    // rebuilds the row
                    (task.id, task.title.clone(), task.completed)
                }
                children=move |task| view! { <TaskRow task=task /> }
            />
        </div>
    }
}
