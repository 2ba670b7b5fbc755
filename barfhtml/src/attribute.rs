use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::case::push_key;
use crate::css::{write_declarations, Declarations};
use crate::RenderOptions;

/// The value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue<'bump> {
    /// A plain string value, written as `key="value"`.
    Str(BumpString<'bump>),
    /// A map of CSS declarations, written as `key="prop:value;..."`.
    Style(Declarations<'bump>),
    /// A boolean attribute, written as the bare key.
    Flag,
}
impl<'bump> AttributeValue<'bump> {
    /// Returns the value as a string slice if this is a [`Str`](AttributeValue::Str).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the declarations if this is a [`Style`](AttributeValue::Style).
    pub fn as_style(&self) -> Option<&Declarations<'bump>> {
        match self {
            AttributeValue::Style(d) => Some(d),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Flag`](AttributeValue::Flag).
    #[must_use]
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A key-value pair for an attribute.
pub struct Attribute<'bump> {
    /// The key of the attribute.
    pub key: BumpString<'bump>,
    /// The value of the attribute.
    pub value: AttributeValue<'bump>,
}
impl<'bump> Attribute<'bump> {
    /// Create a new attribute with a string value.
    pub fn new(bump: &'bump Bump, key: &str, value: &str) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: AttributeValue::Str(BumpString::from_str_in(value, bump)),
        }
    }

    /// Create a new attribute whose value is a map of CSS declarations.
    pub fn style(bump: &'bump Bump, key: &str, declarations: Declarations<'bump>) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: AttributeValue::Style(declarations),
        }
    }

    /// Create a boolean attribute (no value).
    pub fn flag(bump: &'bump Bump, key: &str) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: AttributeValue::Flag,
        }
    }

    /// Get the value as a string slice, if it is a plain string.
    pub fn value_as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Trait for types that can be converted into an Attribute with a bump allocator.
///
/// A bare key becomes a [`Flag`](AttributeValue::Flag); a `(key, value)` tuple becomes a
/// [`Str`](AttributeValue::Str), or a [`Style`](AttributeValue::Style) when the value is a
/// [`Declarations`]. Numeric values are coerced to their string form.
pub trait IntoAttribute<'bump> {
    /// Convert this value into an Attribute using the given bump allocator.
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump>;
}
impl<'bump> IntoAttribute<'bump> for Attribute<'bump> {
    fn into_attribute(self, _bump: &'bump Bump) -> Attribute<'bump> {
        self
    }
}
impl<'bump> IntoAttribute<'bump> for &str {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::flag(bump, self)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, &str) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, &self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (String, String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, &self.0, &self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, BumpString<'bump>) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute {
            key: BumpString::from_str_in(self.0, bump),
            value: AttributeValue::Str(self.1),
        }
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, Declarations<'bump>) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::style(bump, self.0, self.1)
    }
}
macro_rules! numeric_attributes {
    ($($ty:ty),*) => {
        $(
            impl<'bump> IntoAttribute<'bump> for (&str, $ty) {
                fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
                    Attribute {
                        key: BumpString::from_str_in(self.0, bump),
                        value: AttributeValue::Str(bumpalo::format!(in bump, "{}", self.1)),
                    }
                }
            }
        )*
    };
}
numeric_attributes!(i32, i64, u32, u64, usize, f32, f64);

/// An attribute map: unique keys, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes<'bump> {
    entries: BumpVec<'bump, Attribute<'bump>>,
}
impl<'bump> Attributes<'bump> {
    /// Create an empty attribute map.
    pub fn new_in(bump: &'bump Bump) -> Self {
        Attributes {
            entries: BumpVec::new_in(bump),
        }
    }

    /// Build an attribute map from a list of attributes.
    ///
    /// A repeated key replaces the earlier value in place.
    pub fn from_iter_in(
        bump: &'bump Bump,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
    ) -> Self {
        let mut map = Self::new_in(bump);
        for attribute in attributes {
            map.insert(attribute);
        }
        map
    }

    /// Insert an attribute, replacing the value of an existing key in place.
    pub fn insert(&mut self, attribute: Attribute<'bump>) {
        match self
            .entries
            .iter_mut()
            .find(|a| a.key.as_str() == attribute.key.as_str())
        {
            Some(existing) => existing.value = attribute.value,
            None => self.entries.push(attribute),
        }
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&AttributeValue<'bump>> {
        self.entries
            .iter()
            .find(|a| a.key.as_str() == key)
            .map(|a| &a.value)
    }

    /// Overlay `other` onto `self`.
    ///
    /// When both sides hold a style map for the same key, the declarations are merged;
    /// otherwise the value from `other` replaces the one in `self`.
    pub fn merge(mut self, other: Attributes<'bump>) -> Self {
        for attribute in other.entries {
            let existing = self
                .entries
                .iter_mut()
                .find(|a| a.key.as_str() == attribute.key.as_str());
            match existing {
                Some(existing) => {
                    let previous = std::mem::replace(&mut existing.value, AttributeValue::Flag);
                    existing.value = match (previous, attribute.value) {
                        (AttributeValue::Style(ours), AttributeValue::Style(theirs)) => {
                            AttributeValue::Style(ours.merge(theirs))
                        }
                        (_, theirs) => theirs,
                    };
                }
                None => self.entries.push(attribute),
            }
        }
        self
    }

    /// The attributes in insertion order.
    pub fn as_slice(&self) -> &[Attribute<'bump>] {
        self.entries.as_slice()
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl<'bump> IntoIterator for Attributes<'bump> {
    type Item = Attribute<'bump>;
    type IntoIter = bumpalo::collections::vec::IntoIter<'bump, Attribute<'bump>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Append each attribute to `out` as ` key="value"`, ` key="css"` or ` key`.
///
/// Only plain string values have their key converted to dashed-case. Values are written
/// verbatim, with no escaping of quotes or angle brackets.
pub fn write_attributes(
    out: &mut BumpString<'_>,
    attributes: &[Attribute<'_>],
    options: RenderOptions,
) {
    for Attribute { key, value } in attributes {
        out.push(' ');
        match value {
            AttributeValue::Str(value) => {
                push_key(out, key.as_str(), options.convert_camel_case);
                out.push_str("=\"");
                out.push_str(value.as_str());
                out.push('"');
            }
            AttributeValue::Style(declarations) => {
                out.push_str(key.as_str());
                out.push_str("=\"");
                write_declarations(out, declarations.as_slice(), options.convert_camel_case);
                out.push('"');
            }
            AttributeValue::Flag => out.push_str(key.as_str()),
        }
    }
}
