//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector engine and the markup parser to report input they
//! silently tolerate.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about tolerated input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Selector", "invalid selector token `Div` at position 0");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{}", format!("[Lectern {component}] ⚠ {message}").yellow());
    } else {
        log::trace!("suppressed duplicate warning: [{component}] {message}");
    }
}

/// Check whether a warning has already been printed.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    warned().as_ref().is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call when loading a new document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        let message = "recorded message";
        assert!(!has_warned("Test", message));
        warn_once("Test", message);
        warn_once("Test", message);
        assert!(has_warned("Test", message));
    }

    #[test]
    fn test_component_is_part_of_key() {
        let message = "shared message across components";
        warn_once("Alpha", message);
        assert!(has_warned("Alpha", message));
        assert!(!has_warned("Beta", message));
    }
}
