//! The traced error type.
//!
//! A [`TracedError`] stores its fully rendered text, computed once when it is
//! created, and an owned link to the error it was appended to. Displaying an
//! error never walks the chain: the history is already part of the text.
//!
//! ```text
//! loader.rs:read_file():12: file not found;
//! loader.rs:load():40: could not load settings;
//! main.rs:main():7: startup failed
//! ```

use std::error::Error;
use std::fmt;

use crate::constants::CHAIN_SEPARATOR;
use crate::settings;
use crate::trace;

type BoxedError = Box<dyn Error + Send + Sync + 'static>;

/// An error carrying the call sites it was created and propagated through.
pub struct TracedError {
    details: String,
    previous: Option<BoxedError>,
}

impl TracedError {
    /// Create a root error with the caller's location.
    ///
    /// Prefer the [`traced!`](crate::traced) macro, which builds the
    /// `format_args!` for you.
    #[inline(never)]
    pub fn new(details: fmt::Arguments<'_>) -> Self {
        Self {
            details: render_line(details),
            previous: None,
        }
    }

    /// Append a new trace line to `previous`.
    ///
    /// The new error's text is the previous error's text, `";\n"`, then the
    /// new line. Passing `None` is the same as calling [`TracedError::new`]
    /// from the same place.
    #[inline(never)]
    pub fn append<E>(previous: Option<E>, details: fmt::Arguments<'_>) -> Self
    where
        E: Into<BoxedError>,
    {
        let line = render_line(details);
        match previous {
            None => Self {
                details: line,
                previous: None,
            },
            Some(previous) => {
                let previous = previous.into();
                Self {
                    details: format!("{}{}{}", previous, CHAIN_SEPARATOR, line),
                    previous: Some(previous),
                }
            }
        }
    }

    /// The fully rendered text, including every earlier trace line.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// The error this one was appended to.
    pub fn previous(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.previous.as_deref()
    }

    /// `true` if this error was not appended to anything.
    pub fn is_root(&self) -> bool {
        self.previous.is_none()
    }

    /// Iterate from this error back through every previous error.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self as &(dyn Error + 'static)),
        }
    }

    /// The oldest error in the chain.
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        self.chain().last().unwrap_or(self)
    }
}

/// Capture the call site and format one line with the active settings.
///
/// Must only be called directly from a `TracedError` constructor: the
/// default call depth counts this frame and the constructor's.
#[inline(never)]
fn render_line(details: fmt::Arguments<'_>) -> String {
    let (depth, formatter) = settings::snapshot();
    trace::capture(depth).render(formatter.as_ref(), details)
}

impl fmt::Display for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details)
    }
}

impl fmt::Debug for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedError")
            .field("details", &self.details)
            .field("previous", &self.previous)
            .finish()
    }
}

impl Error for TracedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.previous
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Iterator over a chain of errors, newest first.
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
