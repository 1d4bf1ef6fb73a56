//! Call-site capture.
//!
//! [`capture`] walks the live stack, finds its own frame, and reports the
//! file, function and line of a frame some number of levels above it. Capture
//! never fails: anything that cannot be resolved comes back as
//! [`TraceInfo::Unavailable`], which renders as [`NO_TRACE_MSG`].
//!
//! Resolution relies on debug info. Builds without it (or with aggressive
//! inlining and stripped symbols) degrade to the sentinel text.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{NO_TRACE_MSG, names};
use crate::formatter::Formatter;

/// A resolved call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Base file name, e.g. `main.rs`.
    pub file: String,
    /// Function name, shortened by [`short_function_name`].
    pub function: String,
    /// 1-based line number.
    pub line: u32,
}

/// Result of a call-site capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceInfo {
    Found(CallSite),
    Unavailable,
}

impl TraceInfo {
    /// Render one trace line.
    ///
    /// The formatter is only invoked for a resolved call site; an unavailable
    /// trace always renders as [`NO_TRACE_MSG`], whatever the formatter.
    pub fn render(&self, formatter: &dyn Formatter, details: fmt::Arguments<'_>) -> String {
        match self {
            TraceInfo::Found(site) => formatter.format(&site.file, &site.function, site.line, details),
            TraceInfo::Unavailable => NO_TRACE_MSG.to_string(),
        }
    }

    /// The resolved call site, if any.
    pub fn call_site(&self) -> Option<&CallSite> {
        match self {
            TraceInfo::Found(site) => Some(site),
            TraceInfo::Unavailable => None,
        }
    }

    /// `true` if the call site was resolved.
    pub fn is_available(&self) -> bool {
        matches!(self, TraceInfo::Found(_))
    }
}

/// One resolved symbol on the stack. Inlined functions get their own entry.
#[derive(Debug, Default)]
struct RawFrame {
    name: Option<String>,
    file: Option<PathBuf>,
    line: Option<u32>,
}

/// Capture the call site `skip` levels above the caller of this function.
///
/// `capture(0)` reports the function that called `capture`, `capture(1)`
/// that function's caller, and so on. A `skip` past the top of the stack
/// yields [`TraceInfo::Unavailable`].
#[inline(never)]
pub fn capture(skip: usize) -> TraceInfo {
    let anchor = concat!(module_path!(), "::capture");
    let (frames, own) = walk_stack(anchor, skip);

    let Some(own) = own else {
        tracing::debug!(skip, "capture frame not found on stack");
        return TraceInfo::Unavailable;
    };

    let target = own.checked_add(1).and_then(|idx| idx.checked_add(skip));
    let info = target
        .and_then(|idx| frames.get(idx))
        .map_or(TraceInfo::Unavailable, resolve);

    if !info.is_available() {
        tracing::debug!(skip, depth = frames.len(), "caller information unavailable");
    }
    info
}

/// Resolve frames from the innermost outwards, stopping once the frame
/// `skip + 1` levels above `anchor` has been resolved.
///
/// Returns the resolved frames and the index of `anchor` among them.
fn walk_stack(anchor: &str, skip: usize) -> (Vec<RawFrame>, Option<usize>) {
    let mut frames = Vec::new();
    let mut own = None;
    backtrace::trace(|frame| {
        let before = frames.len();
        backtrace::resolve_frame(frame, |symbol| {
            frames.push(RawFrame {
                name: symbol.name().map(|name| format!("{:#}", name)),
                file: symbol.filename().map(Path::to_path_buf),
                line: symbol.lineno(),
            });
        });
        // Keep unresolvable frames so depth counting stays aligned
        if frames.len() == before {
            frames.push(RawFrame::default());
        }

        if own.is_none() {
            own = frames[before..]
                .iter()
                .position(|raw| raw.name.as_deref() == Some(anchor))
                .map(|idx| before + idx);
        }
        match own {
            Some(own) => frames.len() <= own.saturating_add(1).saturating_add(skip),
            None => true,
        }
    });
    (frames, own)
}

fn resolve(frame: &RawFrame) -> TraceInfo {
    let file = match frame.file.as_deref().and_then(base_file_name) {
        Some(file) if !file.is_empty() => file,
        _ => return TraceInfo::Unavailable,
    };
    let line = match frame.line {
        Some(line) if line >= 1 => line,
        _ => return TraceInfo::Unavailable,
    };
    let Some(name) = frame.name.as_deref() else {
        return TraceInfo::Unavailable;
    };

    TraceInfo::Found(CallSite {
        file,
        function: short_function_name(name),
        line,
    })
}

/// Reduce a source path to its file name.
pub fn base_file_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// Shorten a resolved function name.
///
/// A name of exactly two segments, such as `crate_name::function`, is reduced
/// to its last segment. Any other name is returned unchanged.
pub fn short_function_name(name: &str) -> String {
    let segments: Vec<&str> = name.split(names::QUALIFIER_SEPARATOR).collect();
    if let [_, function] = segments.as_slice() {
        return function.to_string();
    }
    name.to_string()
}
