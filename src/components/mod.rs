//! UI Components
//!
//! Reusable Leptos components.

mod activity_log;
mod new_task_form;
mod stats_bar;
mod task_list;
mod task_row;

pub use activity_log::ActivityLog;
pub use new_task_form::NewTaskForm;
pub use stats_bar::StatsBar;
pub use task_list::TaskList;
pub use task_row::TaskRow;
