use thiserror::Error;

/// Caller contract violations detected while rendering dynamic input.
///
/// Unlike a [`crate::Warning`], these abort the render call: producing silently broken
/// markup would be worse than failing.
#[derive(Debug, Error)]
pub enum BarfError {
    /// An entry of a children list was not a string.
    #[error("child {index} of <{tag}> is {found}, expected a string")]
    NonStringChild {
        /// The tag being rendered.
        tag: String,
        /// The position of the child in the list.
        index: usize,
        /// The kind of value that was found.
        found: &'static str,
    },
    /// An attribute value was neither a string, a number, a style map, nor null.
    #[error("attribute `{key}` has an unsupported value ({found})")]
    UnsupportedAttributeValue {
        /// The attribute key.
        key: String,
        /// The kind of value that was found.
        found: &'static str,
    },
    /// A CSS declaration value could not be turned into a string.
    #[error("style property `{property}` has an unsupported value ({found})")]
    UnsupportedStyleValue {
        /// The CSS property.
        property: String,
        /// The kind of value that was found.
        found: &'static str,
    },
    /// The options record could not be read.
    #[error("invalid render options: {0}")]
    InvalidOptions(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for fallible render calls.
pub type Result<T> = std::result::Result<T, BarfError>;
