use std::fmt::Display;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::case::push_key;

/// A single CSS `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'bump> {
    /// The property name, usually camelCase.
    pub property: BumpString<'bump>,
    /// The stringified value.
    pub value: BumpString<'bump>,
}

/// A flat map of CSS declarations, kept in insertion order.
///
/// Used both for inline `style` attribute values and for [`crate::Barf::rule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarations<'bump> {
    entries: BumpVec<'bump, Declaration<'bump>>,
}
impl<'bump> Declarations<'bump> {
    /// Create an empty declaration map.
    pub fn new_in(bump: &'bump Bump) -> Self {
        Declarations {
            entries: BumpVec::new_in(bump),
        }
    }

    /// Create a declaration map from `(property, value)` pairs.
    ///
    /// Later pairs replace earlier ones with the same property.
    pub fn from_pairs_in<K, V>(bump: &'bump Bump, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Display,
    {
        let mut declarations = Self::new_in(bump);
        for (property, value) in pairs {
            let value = bumpalo::format!(in bump, "{}", value);
            declarations.insert(Declaration {
                property: BumpString::from_str_in(property.as_ref(), bump),
                value,
            });
        }
        declarations
    }

    /// Insert a declaration, replacing the value of an existing property in place.
    pub fn insert(&mut self, declaration: Declaration<'bump>) {
        match self
            .entries
            .iter_mut()
            .find(|d| d.property.as_str() == declaration.property.as_str())
        {
            Some(existing) => existing.value = declaration.value,
            None => self.entries.push(declaration),
        }
    }

    /// Get the value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|d| d.property.as_str() == property)
            .map(|d| d.value.as_str())
    }

    /// Overlay `other` onto `self`; properties in `other` win.
    pub fn merge(mut self, other: Declarations<'bump>) -> Self {
        for declaration in other.entries {
            self.insert(declaration);
        }
        self
    }

    /// The declarations in insertion order.
    pub fn as_slice(&self) -> &[Declaration<'bump>] {
        self.entries.as_slice()
    }

    /// The number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode the declarations as `key:value;` pairs.
    pub fn encode(&self, bump: &'bump Bump, convert_camel_case: bool) -> BumpString<'bump> {
        let mut out = BumpString::new_in(bump);
        write_declarations(&mut out, self.as_slice(), convert_camel_case);
        out
    }
}

/// Append `key:value;` for each declaration, converting keys to dashed-case if asked.
///
/// Values are written verbatim: no escaping, no unit inference.
pub fn write_declarations(
    out: &mut BumpString<'_>,
    declarations: &[Declaration<'_>],
    convert_camel_case: bool,
) {
    for Declaration { property, value } in declarations {
        push_key(out, property.as_str(), convert_camel_case);
        out.push(':');
        out.push_str(value.as_str());
        out.push(';');
    }
}
