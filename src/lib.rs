//! # tracerr
//!
//! Errors that record where they were created and every place they were
//! passed along, readable from the error message alone.
//!
//! ```
//! use tracerr::{append, traced, TracedError};
//!
//! fn read_settings() -> Result<(), TracedError> {
//!     Err(traced!("file {} not found", "settings.toml"))
//! }
//!
//! fn start() -> Result<(), TracedError> {
//!     read_settings().map_err(|err| append!(Some(err), "startup failed"))
//! }
//!
//! let err = start().unwrap_err();
//! assert!(!err.is_root());
//! assert_eq!(err.to_string().matches(";\n").count(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`traced`] - The [`TracedError`] type and its chain
//! - [`trace`] - Call-site capture
//! - [`formatter`] - Trace line formatting strategies
//! - [`settings`] - Process-wide call depth and formatter
//! - [`config`] - TOML configuration loading
//! - [`paths`] - XDG-compliant config file discovery
//! - [`errors`] - Configuration error types
//! - [`constants`] - Library constants

pub mod config;
pub mod constants;
pub mod errors;
pub mod formatter;
pub mod paths;
pub mod settings;
pub mod trace;
pub mod traced;

pub use formatter::{DefaultFormatter, Formatter, FormatterKind, JsonFormatter, TraceRecord};
pub use settings::{set_call_depth, set_formatter};
pub use traced::TracedError;

/// Create a root [`TracedError`] from a format string and arguments.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! traced {
    ($($arg:tt)+) => {
        $crate::TracedError::new(::core::format_args!($($arg)+))
    };
}

/// Append a trace line to an `Option` of a previous error.
///
/// `append!(None::<TracedError>, ...)` behaves like [`traced!`].
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! append {
    ($previous:expr, $($arg:tt)+) => {
        $crate::TracedError::append($previous, ::core::format_args!($($arg)+))
    };
}
