use crate::state::Platform;
use crate::util::{mint_note_id, now_ms};

/// Browser-backed implementation of the environment port: wall clock, id
/// mint, and the native `window.confirm` dialog for destructive actions.
pub(crate) struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn now_ms(&self) -> i64 {
        now_ms()
    }

    fn mint_id(&self) -> String {
        mint_note_id()
    }

    fn confirm(&self, message: &str) -> bool {
        // A missing window (or a blocked dialog) counts as "cancel".
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
