//! Non-fatal warnings raised while rendering, and the sinks that receive them.

use std::fmt;

/// A recoverable problem with the input of a render call.
///
/// Rendering always continues after a warning; the offending input is treated as empty
/// (or, for [`Warning::ChildrenDiscarded`], simply not written).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The attributes were not a map and have been removed.
    AttributesIgnored {
        /// The tag being rendered.
        tag: String,
        /// The kind of value that was found instead.
        found: &'static str,
    },
    /// The children were neither a string nor a list and have been removed.
    ChildrenIgnored {
        /// The tag being rendered.
        tag: String,
        /// The kind of value that was found instead.
        found: &'static str,
    },
    /// A singular element was given children, which are not written.
    ChildrenDiscarded {
        /// The tag being rendered.
        tag: String,
    },
}
impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::AttributesIgnored { tag, found } => write!(
                f,
                "attributes of <{tag}> do not form a map (found {found}); removing attributes"
            ),
            Warning::ChildrenIgnored { tag, found } => write!(
                f,
                "children of <{tag}> must be a string or a list (found {found}); removing children"
            ),
            Warning::ChildrenDiscarded { tag } => {
                write!(f, "<{tag}> is singular; its children are not rendered")
            }
        }
    }
}

/// Receives the [`Warning`]s produced while rendering.
///
/// Any `Fn(&Warning)` closure is a valid sink.
pub trait Diagnostics {
    /// Handle a warning.
    fn warn(&self, warning: &Warning);
}
impl<F: Fn(&Warning)> Diagnostics for F {
    fn warn(&self, warning: &Warning) {
        self(warning)
    }
}

/// Drops every warning. This is the default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;
impl Diagnostics for NoopDiagnostics {
    fn warn(&self, _warning: &Warning) {}
}

/// Forwards warnings to the [`log`] crate at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;
impl Diagnostics for LogDiagnostics {
    fn warn(&self, warning: &Warning) {
        log::warn!(target: "barfhtml", "{warning}");
    }
}
