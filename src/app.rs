//! Task List App
//!
//! Root component: owns the task collection and kicks off the initial
//! load. Everything below it talks to the backend through the shared
//! client and replaces the list wholesale with each successful fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::activity::SignalLog;
use crate::api::{HttpBackend, DEFAULT_API_BASE};
use crate::client::TaskClient;
use crate::components::{ActivityLog, NewTaskForm, StatsBar, TaskList};
use crate::context::AppContext;
use crate::dialogs::BrowserDialogs;
use crate::models::Task;

#[component]
pub fn App() -> impl IntoView {
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let log = SignalLog::new();
    let client = TaskClient::new(HttpBackend::new(DEFAULT_API_BASE), BrowserDialogs, log);

    let ctx = AppContext::new(client, (tasks, set_tasks), log);
    provide_context(ctx.clone());

    // Initial load on mount
    Effect::new(move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            let result = ctx.client().load_tasks().await;
            if let Some(list) = result.tasks {
                ctx.refresh(list);
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Task List"</h1>
                <NewTaskForm />
                <TaskList />
                <StatsBar />
            </main>
            <ActivityLog />
        </div>
    }
}
