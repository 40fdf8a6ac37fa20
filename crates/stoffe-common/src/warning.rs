//! Warnings with colored terminal output.
//!
//! Provides deduplication so a string rendered many times with the same
//! problem reports it once. Used by the splitter, the renderer and the
//! fragment parser to report conditions they recovered from.
//!
//! Messages name the kind of problem, never the input that caused it, so the
//! set grows with the number of distinct problem kinds. Details belong in the
//! caller's own issue list.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recovered problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Splitter", "unterminated tag; kept as text");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[stoffe {component}] ⚠ {message}").yellow());
    }
}

/// Whether this exact warning has been reported since the last
/// [`clear_warnings`].
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap()
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn warning_count() -> usize {
    WARNED.lock().unwrap().as_ref().map_or(0, HashSet::len)
}

/// Clear all recorded warnings (call before rendering a new batch)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
