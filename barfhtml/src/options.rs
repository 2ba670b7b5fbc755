/// Per-call rendering options.
///
/// Every field is optional so that a [`crate::Shortcut`]'s defaults can sit underneath
/// whatever the caller passes; see [`Options::or`]. Unset fields fall back to the values
/// of [`RenderOptions::default`] when resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Whether camelCase attribute and CSS keys are converted to dashed-case.
    #[cfg_attr(feature = "serde", serde(alias = "bConvertCamelCase"))]
    pub convert_camel_case: Option<bool>,
    /// Whether the element is singular (no children, no closing tag).
    #[cfg_attr(feature = "serde", serde(alias = "bSingular"))]
    pub singular: Option<bool>,
}
impl Options {
    /// Options with nothing set.
    pub const fn new() -> Self {
        Options {
            convert_camel_case: None,
            singular: None,
        }
    }

    /// Set `convert_camel_case`.
    pub const fn convert_camel_case(self, convert_camel_case: bool) -> Self {
        Options {
            convert_camel_case: Some(convert_camel_case),
            ..self
        }
    }

    /// Set `singular`.
    pub const fn singular(self, singular: bool) -> Self {
        Options {
            singular: Some(singular),
            ..self
        }
    }

    /// Fill any unset field of `self` from `defaults`.
    ///
    /// This is a shallow merge: fields set on `self` always win.
    pub const fn or(self, defaults: Options) -> Self {
        Options {
            convert_camel_case: match self.convert_camel_case {
                Some(v) => Some(v),
                None => defaults.convert_camel_case,
            },
            singular: match self.singular {
                Some(v) => Some(v),
                None => defaults.singular,
            },
        }
    }

    /// Resolve into concrete [`RenderOptions`], applying the defaults.
    pub fn resolve(self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            convert_camel_case: self
                .convert_camel_case
                .unwrap_or(defaults.convert_camel_case),
            singular: self.singular.unwrap_or(defaults.singular),
        }
    }
}

/// Fully-resolved options used while encoding a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether camelCase keys are converted to dashed-case.
    pub convert_camel_case: bool,
    /// Whether the element is singular.
    pub singular: bool,
}
impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            convert_camel_case: true,
            singular: false,
        }
    }
}
