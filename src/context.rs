//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::activity::SignalLog;
use crate::api::HttpBackend;
use crate::client::TaskClient;
use crate::dialogs::BrowserDialogs;
use crate::models::{Task, TaskStats};

/// The concrete client wired for the browser.
pub type UiClient = TaskClient<HttpBackend, BrowserDialogs, SignalLog>;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Synchronization client shared by every action handler
    client: UiClient,
    /// Rendered task collection - read
    pub tasks: ReadSignal<Vec<Task>>,
    /// Rendered task collection - write
    set_tasks: WriteSignal<Vec<Task>>,
    /// Activity log shown in the log panel
    pub log: SignalLog,
}

impl AppContext {
    pub fn new(
        client: UiClient,
        tasks: (ReadSignal<Vec<Task>>, WriteSignal<Vec<Task>>),
        log: SignalLog,
    ) -> Self {
        Self {
            client,
            tasks: tasks.0,
            set_tasks: tasks.1,
            log,
        }
    }

    pub fn client(&self) -> UiClient {
        self.client.clone()
    }

    /// Replace the rendered list with a fresh fetch.
    pub fn refresh(&self, tasks: Vec<Task>) {
        self.set_tasks.set(tasks);
    }

    /// Stats derived from the currently rendered collection.
    pub fn stats(&self) -> TaskStats {
        TaskStats::of(&self.tasks.get())
    }
}
