//! New Task Form Component
//!
//! Input row for creating tasks; Enter or the Add button submits.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Form for creating new tasks. Validation (empty title) happens in the
/// client, which raises the notification itself; the input is only
/// cleared when the backend accepted the task.
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        let ctx = ctx.clone();
        spawn_local(async move {
            let result = ctx.client().add_task(&text).await;
            if result.ok {
                set_title.set(String::new());
            }
            if let Some(list) = result.tasks {
                ctx.refresh(list);
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
