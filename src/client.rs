//! Task Client
//!
//! The synchronization loop: every user action is a single backend call
//! followed by a full-list reload. The client never constructs or mutates
//! a task locally; the view only ever shows the most recent successful
//! fetch.

use crate::activity::{LogKind, LogSink};
use crate::api::TaskBackend;
use crate::dialogs::Dialogs;
use crate::models::Task;

/// What an action left behind for the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult {
    /// The action itself went through (validation passed and the backend
    /// accepted the request).
    pub ok: bool,
    /// Fresh task list from the follow-up fetch, when one succeeded. The
    /// view replaces its rendering with this wholesale.
    pub tasks: Option<Vec<Task>>,
}

impl ActionResult {
    fn failed() -> Self {
        Self {
            ok: false,
            tasks: None,
        }
    }
}

/// Browser-side task client. Holds no task state of its own; the backend
/// is the sole source of truth and is re-fetched after every mutation.
#[derive(Clone)]
pub struct TaskClient<B, D, L> {
    backend: B,
    dialogs: D,
    log: L,
}

impl<B, D, L> TaskClient<B, D, L>
where
    B: TaskBackend,
    D: Dialogs,
    L: LogSink,
{
    pub fn new(backend: B, dialogs: D, log: L) -> Self {
        let client = Self {
            backend,
            dialogs,
            log,
        };
        client.info("task client initialized".to_string());
        client
    }

    fn info(&self, message: String) {
        self.log.append(LogKind::Info, message);
    }

    /// Failures are logged with detail and surfaced as a blocking
    /// notification; they never propagate past the action handler.
    fn report(&self, notice: &str, detail: String) {
        self.log.append(LogKind::Error, detail);
        self.dialogs.alert(notice);
    }

    /// Fetch the full task collection.
    pub async fn load_tasks(&self) -> ActionResult {
        self.info("fetching task list from the server".to_string());
        match self.backend.list().await {
            Ok(tasks) => {
                self.info(format!("loaded {} tasks", tasks.len()));
                ActionResult {
                    ok: true,
                    tasks: Some(tasks),
                }
            }
            Err(err) => {
                self.report(
                    "Cannot reach the server. Make sure the backend is running.",
                    format!("failed to load tasks: {err}"),
                );
                ActionResult::failed()
            }
        }
    }

    /// Create a task, then resynchronize with a full reload. An empty or
    /// whitespace-only title is rejected locally without a network call.
    pub async fn add_task(&self, title: &str) -> ActionResult {
        let title = title.trim();
        if title.is_empty() {
            self.report(
                "Please enter a task title.",
                "rejected empty task title".to_string(),
            );
            return ActionResult::failed();
        }
        self.info(format!("adding task \"{title}\""));
        match self.backend.create(title).await {
            Ok(()) => {
                self.info("task added, refreshing the list".to_string());
                let reload = self.load_tasks().await;
                ActionResult {
                    ok: true,
                    tasks: reload.tasks,
                }
            }
            Err(err) => {
                self.report(
                    "Failed to add the task.",
                    format!("failed to add task: {err}"),
                );
                ActionResult::failed()
            }
        }
    }

    /// Toggle completion, then reload whether or not the call succeeded.
    /// The rendered view may already disagree with the backend, so even a
    /// failed toggle ends in a resynchronizing fetch.
    pub async fn toggle_task(&self, id: u32) -> ActionResult {
        self.info(format!("toggling task {id}"));
        match self.backend.toggle(id).await {
            Ok(()) => {
                self.info("task state updated, refreshing the list".to_string());
                let reload = self.load_tasks().await;
                ActionResult {
                    ok: true,
                    tasks: reload.tasks,
                }
            }
            Err(err) => {
                self.report(
                    "Failed to update the task.",
                    format!("failed to toggle task {id}: {err}"),
                );
                let reload = self.load_tasks().await;
                ActionResult {
                    ok: false,
                    tasks: reload.tasks,
                }
            }
        }
    }

    /// Delete a task after interactive confirmation. Declining is a silent
    /// no-op: no request, no log entry, no notification.
    pub async fn delete_task(&self, id: u32) -> ActionResult {
        if !self.dialogs.confirm("Delete this task?") {
            return ActionResult::failed();
        }
        self.info(format!("deleting task {id}"));
        match self.backend.delete(id).await {
            Ok(()) => {
                self.info("task deleted, refreshing the list".to_string());
                let reload = self.load_tasks().await;
                ActionResult {
                    ok: true,
                    tasks: reload.tasks,
                }
            }
            Err(err) => {
                self.report(
                    "Failed to delete the task.",
                    format!("failed to delete task {id}: {err}"),
                );
                ActionResult::failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::api::ApiError;
    use crate::models::TaskStats;

    /// Records every request in order and serves scripted responses,
    /// tracking task state the way the real backend would.
    #[derive(Clone, Default)]
    struct MockBackend {
        calls: Rc<RefCell<Vec<String>>>,
        tasks: Rc<RefCell<Vec<Task>>>,
        next_id: Rc<RefCell<u32>>,
        /// Calls that should fail with a 500, by method name.
        failing: Rc<RefCell<Vec<&'static str>>>,
    }

    impl MockBackend {
        fn with_tasks(tasks: Vec<Task>) -> Self {
            let next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
            let backend = Self::default();
            *backend.tasks.borrow_mut() = tasks;
            *backend.next_id.borrow_mut() = next_id;
            backend
        }

        fn fail_on(&self, method: &'static str) {
            self.failing.borrow_mut().push(method);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn check(&self, method: &'static str) -> Result<(), ApiError> {
            if self.failing.borrow().contains(&method) {
                Err(ApiError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    impl TaskBackend for MockBackend {
        async fn list(&self) -> Result<Vec<Task>, ApiError> {
            self.calls.borrow_mut().push("list".to_string());
            self.check("list")?;
            Ok(self.tasks.borrow().clone())
        }

        async fn create(&self, title: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("create {title}"));
            self.check("create")?;
            let id = *self.next_id.borrow();
            *self.next_id.borrow_mut() += 1;
            self.tasks.borrow_mut().push(Task {
                id,
                title: title.to_string(),
                completed: false,
            });
            Ok(())
        }

        async fn toggle(&self, id: u32) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("toggle {id}"));
            self.check("toggle")?;
            if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|task| task.id == id) {
                task.completed = !task.completed;
            }
            Ok(())
        }

        async fn delete(&self, id: u32) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete {id}"));
            self.check("delete")?;
            self.tasks.borrow_mut().retain(|task| task.id != id);
            Ok(())
        }
    }

    /// Answers every confirmation the same way and records alerts.
    #[derive(Clone)]
    struct StubDialogs {
        confirm_answer: bool,
        alerts: Rc<RefCell<Vec<String>>>,
    }

    impl StubDialogs {
        fn new(confirm_answer: bool) -> Self {
            Self {
                confirm_answer,
                alerts: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn alerts(&self) -> Vec<String> {
            self.alerts.borrow().clone()
        }
    }

    impl Dialogs for StubDialogs {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirm_answer
        }
    }

    #[derive(Clone, Default)]
    struct RecordingLog {
        entries: Rc<RefCell<Vec<(LogKind, String)>>>,
    }

    impl RecordingLog {
        fn entries(&self) -> Vec<(LogKind, String)> {
            self.entries.borrow().clone()
        }
    }

    impl LogSink for RecordingLog {
        fn append(&self, kind: LogKind, message: String) {
            self.entries.borrow_mut().push((kind, message));
        }
    }

    fn task(id: u32, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            completed,
        }
    }

    fn client_with(
        backend: MockBackend,
        confirm_answer: bool,
    ) -> (
        TaskClient<MockBackend, StubDialogs, RecordingLog>,
        StubDialogs,
        RecordingLog,
    ) {
        let dialogs = StubDialogs::new(confirm_answer);
        let log = RecordingLog::default();
        let client = TaskClient::new(backend, dialogs.clone(), log.clone());
        (client, dialogs, log)
    }

    #[tokio::test]
    async fn test_load_replaces_view_with_fetch() {
        let backend = MockBackend::with_tasks(vec![task(1, "buy milk", false)]);
        let (client, dialogs, _) = client_with(backend.clone(), true);

        let result = client.load_tasks().await;

        assert!(result.ok);
        assert_eq!(result.tasks, Some(vec![task(1, "buy milk", false)]));
        assert_eq!(backend.calls(), vec!["list"]);
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_notifies_and_keeps_view() {
        let backend = MockBackend::default();
        backend.fail_on("list");
        let (client, dialogs, log) = client_with(backend, true);

        let result = client.load_tasks().await;

        assert!(!result.ok);
        assert_eq!(result.tasks, None);
        let alerts = dialogs.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("Cannot reach the server"));
        assert!(log
            .entries()
            .iter()
            .any(|(kind, message)| *kind == LogKind::Error
                && message.contains("failed to load tasks")));
    }

    #[tokio::test]
    async fn test_add_rejects_empty_title_without_request() {
        for input in ["", "   "] {
            let backend = MockBackend::default();
            let (client, dialogs, _) = client_with(backend.clone(), true);

            let result = client.add_task(input).await;

            assert!(!result.ok);
            assert_eq!(result.tasks, None);
            assert!(backend.calls().is_empty());
            assert_eq!(dialogs.alerts(), vec!["Please enter a task title."]);
        }
    }

    #[tokio::test]
    async fn test_add_posts_then_reloads_exactly_once() {
        let backend = MockBackend::with_tasks(vec![task(1, "buy milk", false)]);
        let (client, dialogs, _) = client_with(backend.clone(), true);

        let result = client.add_task("write spec").await;

        assert!(result.ok);
        assert_eq!(backend.calls(), vec!["create write spec", "list"]);
        let tasks = result.tasks.expect("reload should succeed");
        assert_eq!(
            tasks,
            vec![task(1, "buy milk", false), task(2, "write spec", false)]
        );
        let stats = TaskStats::of(&tasks);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.pending, 2);
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_add_trims_title_before_posting() {
        let backend = MockBackend::default();
        let (client, _, _) = client_with(backend.clone(), true);

        let result = client.add_task("  write spec  ").await;

        assert!(result.ok);
        assert_eq!(backend.calls(), vec!["create write spec", "list"]);
    }

    #[tokio::test]
    async fn test_add_failure_skips_reload() {
        let backend = MockBackend::default();
        backend.fail_on("create");
        let (client, dialogs, _) = client_with(backend.clone(), true);

        let result = client.add_task("write spec").await;

        assert!(!result.ok);
        assert_eq!(result.tasks, None);
        assert_eq!(backend.calls(), vec!["create write spec"]);
        assert_eq!(dialogs.alerts(), vec!["Failed to add the task."]);
    }

    #[tokio::test]
    async fn test_toggle_reloads_after_success() {
        let backend = MockBackend::with_tasks(vec![task(1, "buy milk", false)]);
        let (client, _, _) = client_with(backend.clone(), true);

        let result = client.toggle_task(1).await;

        assert!(result.ok);
        assert_eq!(backend.calls(), vec!["toggle 1", "list"]);
        assert_eq!(result.tasks, Some(vec![task(1, "buy milk", true)]));
    }

    #[tokio::test]
    async fn test_toggle_failure_still_reloads() {
        let backend = MockBackend::with_tasks(vec![task(1, "buy milk", false)]);
        backend.fail_on("toggle");
        let (client, dialogs, _) = client_with(backend.clone(), true);

        let result = client.toggle_task(1).await;

        assert!(!result.ok);
        assert_eq!(backend.calls(), vec!["toggle 1", "list"]);
        assert_eq!(dialogs.alerts(), vec!["Failed to update the task."]);
        // The reload carries the backend's actual state, not an optimistic
        // flip.
        assert_eq!(result.tasks, Some(vec![task(1, "buy milk", false)]));
    }

    #[tokio::test]
    async fn test_delete_declined_is_a_silent_noop() {
        let backend = MockBackend::with_tasks(vec![task(1, "buy milk", false)]);
        let (client, dialogs, log) = client_with(backend.clone(), false);
        let entries_before = log.entries().len();

        let result = client.delete_task(1).await;

        assert!(!result.ok);
        assert_eq!(result.tasks, None);
        assert!(backend.calls().is_empty());
        assert!(dialogs.alerts().is_empty());
        assert_eq!(log.entries().len(), entries_before);
    }

    #[tokio::test]
    async fn test_delete_confirmed_deletes_then_reloads() {
        let backend =
            MockBackend::with_tasks(vec![task(1, "buy milk", false), task(2, "write spec", true)]);
        let (client, _, _) = client_with(backend.clone(), true);

        let result = client.delete_task(1).await;

        assert!(result.ok);
        assert_eq!(backend.calls(), vec!["delete 1", "list"]);
        assert_eq!(result.tasks, Some(vec![task(2, "write spec", true)]));
    }

    #[tokio::test]
    async fn test_delete_failure_does_not_reload() {
        let backend = MockBackend::with_tasks(vec![task(1, "buy milk", false)]);
        backend.fail_on("delete");
        let (client, dialogs, _) = client_with(backend.clone(), true);

        let result = client.delete_task(1).await;

        assert!(!result.ok);
        assert_eq!(result.tasks, None);
        assert_eq!(backend.calls(), vec!["delete 1"]);
        assert_eq!(dialogs.alerts(), vec!["Failed to delete the task."]);
    }
}
