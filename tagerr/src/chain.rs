//! Bounded walks over foreign `source()` chains

use std::error::Error as StdError;

/// Maximum number of steps any cause walk takes before giving up
pub const MAX_UNWRAP_DEPTH: usize = 100;

/// Follow `source()` to the innermost error.
///
/// A misbehaving error type can report itself (or a cycle) as its own source;
/// the walk stops after [`MAX_UNWRAP_DEPTH`] steps and returns the last error
/// it reached.
pub fn root_source<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    for _ in 0..MAX_UNWRAP_DEPTH {
        match current.source() {
            Some(next) => current = next,
            None => return current,
        }
    }
    tracing::warn!(limit = MAX_UNWRAP_DEPTH, "error source chain did not terminate");
    current
}
