#![deny(missing_docs)]
//! A crate for rendering tag/attribute/children descriptors straight into HTML strings.
//!
//! There is no intermediate tree: each call to a [`Barf`] method returns a finished
//! string, which is then passed as a child to the enclosing call. Attributes map to
//! plain values, inline-style declaration maps, or bare boolean flags, and camelCase
//! keys are converted to dashed-case by default.
//!
//! All strings are allocated through a bump allocator ([bumpalo::Bump]) which must be
//! given to [`Barf::new`].
//!
//! Nothing is escaped unless asked for: attribute values and children are written
//! verbatim, so untrusted text should go through [`Barf::text`] or [`Barf::quoted`].
//!
//! # Example
//!
//! ```
//! use barfhtml::{bumpalo::Bump, Barf};
//!
//! let bump = Bump::new();
//! let b = Barf::new(&bump);
//! let page = b.div(
//!     [b.attr(("class", "container"))],
//!     [
//!         b.h1([], "Hello, World!"),
//!         b.img([b.attr(("src", "logo.png"))], ()),
//!     ],
//! );
//! assert_eq!(
//!     page.as_str(),
//!     r#"<div class="container"><h1>Hello, World!</h1><img src="logo.png"></div>"#
//! );
//! ```

pub mod builder;
pub mod dom;

// Re-export bumpalo for convenience
pub use bumpalo;

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod attribute;
pub use attribute::{write_attributes, Attribute, AttributeValue, Attributes, IntoAttribute};

mod case;
pub use case::{camel_to_dashed, kebab_case};

mod children;
pub use children::{ChildText, IntoChildren};

mod css;
pub use css::{write_declarations, Declaration, Declarations};

mod diagnostics;
pub use diagnostics::{Diagnostics, LogDiagnostics, NoopDiagnostics, Warning};

mod error;
pub use error::{BarfError, Result};

mod options;
pub use options::{Options, RenderOptions};

pub use builder::{shortcut_defaults, Barf, Shortcut, SHORTCUTS};

#[cfg(feature = "json")]
pub mod json;
