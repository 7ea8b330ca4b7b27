//! Blocking Dialogs
//!
//! User-acknowledged notifications and the delete confirmation.

use leptos::prelude::window;

/// Blocking user interaction surface. Every error notification and every
/// delete confirmation goes through here.
pub trait Dialogs {
    fn alert(&self, message: &str);
    /// `false` when the user declines or the dialog is unavailable.
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm` implementation.
#[derive(Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        let _ = window().alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }
}
