//! Library constants for trace capture, rendering, and configuration discovery.
//!
//! This module contains all constant values used throughout the crate,
//! including the sentinel text, default call depth, and config file locations.

/// Text rendered in place of a trace line when the caller cannot be resolved.
pub const NO_TRACE_MSG: &str = "Unable to retrieve error stack trace";

/// Separator placed between a previous error's text and the new trace line.
pub const CHAIN_SEPARATOR: &str = ";\n";

/// Label the structured formatter puts before a serialization failure.
pub const DETAILS_LABEL: &str = "Details: ";

/// Trace depth constants.
pub mod depth {
    /// Frames skipped by default.
    ///
    /// 0 is the internal line renderer, 1 is the [`TracedError`](crate::TracedError)
    /// constructor, and 2 is whoever called the constructor.
    pub const DEFAULT_CALL_DEPTH: usize = 2;

    /// Largest call depth accepted from a configuration file.
    pub const MAX_CALL_DEPTH: usize = 64;
}

/// Function name constants.
pub mod names {
    /// Path delimiter of a resolved function name.
    pub const QUALIFIER_SEPARATOR: &str = "::";

    /// Suffix the structured formatter appends to the function name.
    pub const FUNC_SUFFIX: &str = "()";
}

/// Configuration file discovery constants.
pub mod config {
    /// Name of the configuration file.
    pub const FILE_NAME: &str = "tracerr.toml";

    /// Directory under `~/.config` or `$XDG_CONFIG_HOME`.
    pub const APP_DIR: &str = "tracerr";

    /// Environment variable holding an explicit config file path.
    pub const PATH_ENV: &str = "TRACERR_CONFIG";
}
