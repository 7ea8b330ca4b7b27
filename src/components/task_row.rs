//! Task Row Component
//!
//! A single task: completion checkbox, title, delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();

    let toggle_ctx = ctx.clone();
    let delete_ctx = ctx;

    view! {
        <div class=if completed { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |ev| {
                    // The browser flips the box eagerly; snap it back so
                    // the reload's state is the only thing that shows
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    input.set_checked(completed);
                    let ctx = toggle_ctx.clone();
                    spawn_local(async move {
                        if let Some(list) = ctx.client().toggle_task(id).await.tasks {
                            ctx.refresh(list);
                        }
                    });
                }
            />
            <span class="task-title">{title}</span>
            <button
                class="delete-btn"
                on:click=move |_| {
                    let ctx = delete_ctx.clone();
                    spawn_local(async move {
                        if let Some(list) = ctx.client().delete_task(id).await.tasks {
                            ctx.refresh(list);
                        }
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}
