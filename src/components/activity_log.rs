//! Activity Log Component
//!
//! Scrolling panel of client actions and outcomes.

use leptos::prelude::*;

use crate::activity::{LogEntry, LogKind};
use crate::context::AppContext;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let entries = ctx.log.entries();
    let container = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view
    Effect::new(move |_| {
        let _ = entries.get();
        if let Some(el) = container.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <aside class="activity-log">
            <h2>"Activity"</h2>
            <div class="log-container" node_ref=container>
                <For
                    each=move || entries.get().into_iter().enumerate().collect::<Vec<_>>()
                    key=|(index, _)| *index
                    children=move |(_, entry): (usize, LogEntry)| {
                        let class = match entry.kind {
                            LogKind::Error => "log-item error",
                            LogKind::Info => "log-item",
                        };
                        view! {
                            <div class=class>"[" {entry.stamp} "] " {entry.message}</div>
                        }
                    }
                />
            </div>
        </aside>
    }
}
