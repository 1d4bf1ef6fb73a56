//! Process-wide trace settings.
//!
//! Every [`TracedError`](crate::TracedError) created reads the active
//! formatter and call depth from here. Settings are guarded by a
//! read/write lock, so reconfiguring while other threads create errors is
//! safe; each creation call sees one consistent snapshot. Changes only affect
//! errors created afterwards.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::constants::depth::DEFAULT_CALL_DEPTH;
use crate::formatter::{DefaultFormatter, Formatter};

struct Settings {
    call_depth: usize,
    formatter: Arc<dyn Formatter>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            call_depth: DEFAULT_CALL_DEPTH,
            formatter: Arc::new(DefaultFormatter),
        }
    }
}

static SETTINGS: LazyLock<RwLock<Settings>> = LazyLock::new(|| RwLock::new(Settings::default()));

/// Set the number of frames skipped when capturing a call site.
///
/// Raise it by one for every layer wrapping this crate, so the reported
/// call site is the wrapper's caller rather than the wrapper itself.
pub fn set_call_depth(depth: usize) {
    tracing::debug!(depth, "call depth changed");
    SETTINGS.write().call_depth = depth;
}

/// Replace the formatter used for every new trace line.
pub fn set_formatter<F>(formatter: F)
where
    F: Formatter + 'static,
{
    set_formatter_arc(Arc::new(formatter));
}

/// Replace the formatter with one that is already shared.
pub fn set_formatter_arc(formatter: Arc<dyn Formatter>) {
    tracing::debug!("formatter changed");
    SETTINGS.write().formatter = formatter;
}

/// The call depth used by the next capture.
pub fn call_depth() -> usize {
    SETTINGS.read().call_depth
}

/// The formatter used for the next trace line.
pub fn formatter() -> Arc<dyn Formatter> {
    Arc::clone(&SETTINGS.read().formatter)
}

/// Restore the default call depth and formatter.
pub fn reset() {
    *SETTINGS.write() = Settings::default();
}

/// Read depth and formatter under one lock.
pub(crate) fn snapshot() -> (usize, Arc<dyn Formatter>) {
    let settings = SETTINGS.read();
    (settings.call_depth, Arc::clone(&settings.formatter))
}
