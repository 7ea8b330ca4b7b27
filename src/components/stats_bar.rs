//! Stats Bar Component
//!
//! Total / completed / pending counts for the current collection.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let stats = Memo::new(move |_| ctx.stats());

    view! {
        <div class="stats-bar">
            <span class="stat">"Total: " {move || stats.get().total}</span>
            <span class="stat">"Completed: " {move || stats.get().completed}</span>
            <span class="stat">"Pending: " {move || stats.get().pending}</span>
        </div>
    }
}
